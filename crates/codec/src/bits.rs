//! MSB-first bit packing.
//!
//! Code words of a fixed width are appended one after another; each byte is
//! filled from its most significant bit down and the final byte is padded
//! with zero bits in its low-order positions.

/// Mask selecting the low `bits` bits of a `u64`.
#[inline]
pub(crate) fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Number of bytes needed to hold `values` code words of `bits` bits each,
/// or `None` if the bit count does not fit in `usize`.
#[inline]
pub(crate) fn packed_len(values: usize, bits: u32) -> Option<usize> {
    values
        .checked_mul(bits as usize)
        .map(|total| total.div_ceil(8))
}

/// Appends fixed-width code words to a byte buffer, MSB first.
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    byte: u8,
    filled: u32,
}

impl BitWriter {
    pub(crate) fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            byte: 0,
            filled: 0,
        }
    }

    /// Write the low `bits` bits of `code`, most significant first.
    pub(crate) fn write(&mut self, code: u64, bits: u32) {
        let mut remaining = bits;
        while remaining > 0 {
            let room = 8 - self.filled;
            let take = room.min(remaining);
            let chunk = ((code >> (remaining - take)) & low_mask(take)) as u8;
            self.byte |= chunk << (room - take);
            self.filled += take;
            remaining -= take;
            if self.filled == 8 {
                self.bytes.push(self.byte);
                self.byte = 0;
                self.filled = 0;
            }
        }
    }

    /// Flush the partial byte (zero padded) and return the packed bytes.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        if self.filled > 0 {
            self.bytes.push(self.byte);
        }
        self.bytes
    }
}

/// Reads fixed-width code words back out of an MSB-first byte buffer.
pub(crate) struct BitReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Read the next `bits` bits as a code word, or `None` if the buffer is
    /// exhausted first.
    pub(crate) fn read(&mut self, bits: u32) -> Option<u64> {
        if self.position + bits as usize > self.bytes.len() * 8 {
            return None;
        }
        let mut code = 0u64;
        let mut remaining = bits;
        while remaining > 0 {
            let byte = self.bytes[self.position / 8];
            let offset = (self.position % 8) as u32;
            let available = 8 - offset;
            let take = available.min(remaining);
            let chunk = (u64::from(byte) >> (available - take)) & low_mask(take);
            code = (code << take) | chunk;
            self.position += take as usize;
            remaining -= take;
        }
        Some(code)
    }
}
