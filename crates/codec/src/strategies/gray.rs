use crate::bits::low_mask;
use crate::traits::BitMapper;

/// Strategy: reflected binary (Gray) code.
///
/// # How it works
///
/// The index is first mapped to `g = index ^ (index >> 1)` and `g` is written
/// big-endian in `bits` bits. Decoding parses `g` and undoes the transform by
/// propagating XOR from the most significant bit down.
///
/// # Why use this?
///
/// *   **Adjacency:** Consecutive indices differ in exactly one bit, so a
///     single bit flip never causes a "Hamming cliff" between neighbouring
///     quantization levels.
/// *   **Cost:** Decoding is `O(bits)` instead of a plain mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrayBinary;

impl BitMapper for GrayBinary {
    #[inline]
    fn to_code(&self, index: u64, bits: u32) -> u64 {
        gray_encode(index) & low_mask(bits)
    }

    #[inline]
    fn from_code(&self, code: u64, bits: u32) -> u64 {
        gray_decode(code, bits)
    }
}

/// Reflected binary code of `index`.
#[inline]
pub fn gray_encode(index: u64) -> u64 {
    index ^ (index >> 1)
}

/// Invert `gray_encode` for a `bits`-wide code word.
///
/// `index[msb] = g[msb]`, then `index[i] = index[i + 1] ^ g[i]` for each
/// lower bit. Widths above 64 decode as 64.
pub fn gray_decode(code: u64, bits: u32) -> u64 {
    let bits = bits.min(u64::BITS);
    let code = code & low_mask(bits);
    let mut index = 0u64;
    let mut carry = 0u64;
    for shift in (0..bits).rev() {
        carry ^= (code >> shift) & 1;
        index |= carry << shift;
    }
    index
}
