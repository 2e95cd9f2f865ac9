use crate::bits::low_mask;
use crate::traits::BitMapper;

/// Strategy: natural (positional) binary.
///
/// The code word is the index itself, written big-endian in exactly `bits`
/// bits. Adjacent indices may differ in many bits (`0111 -> 1000`), so a
/// single mutation can move the decoded value a long way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalBinary;

impl BitMapper for NaturalBinary {
    #[inline]
    fn to_code(&self, index: u64, bits: u32) -> u64 {
        index & low_mask(bits)
    }

    #[inline]
    fn from_code(&self, code: u64, bits: u32) -> u64 {
        code & low_mask(bits)
    }
}
