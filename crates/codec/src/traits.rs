/// Core trait for integer-to-bitstring mappings.
///
/// This trait defines the "contract" every mapping strategy must follow.
/// Any strategy (like `NaturalBinary` or `GrayBinary`) must be able to:
/// 1.  `to_code`: Turn a quantized index into a `bits`-wide code word.
/// 2.  `from_code`: Turn a code word back into the index it was built from.
///
/// Code words are carried in the low `bits` bits of a `u64` and written to the
/// genome most-significant bit first. Widths above 64 only add leading zero
/// bits; the code word itself never holds more than 64.
pub trait BitMapper {
    fn to_code(&self, index: u64, bits: u32) -> u64;
    fn from_code(&self, code: u64, bits: u32) -> u64;

    /// Expand the code word for `index` into `bits` booleans, MSB first.
    fn to_bits(&self, index: u64, bits: u32) -> Vec<bool> {
        let code = self.to_code(index, bits);
        (0..bits)
            .rev()
            .map(|shift| code.checked_shr(shift).unwrap_or(0) & 1 == 1)
            .collect()
    }

    /// Parse an MSB-first bit sequence back into an index.
    ///
    /// Only the trailing 64 bits of longer sequences contribute.
    fn from_bits(&self, bits: &[bool]) -> u64 {
        let tail = &bits[bits.len().saturating_sub(u64::BITS as usize)..];
        let code = tail
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
        self.from_code(code, tail.len() as u32)
    }
}

/// Genome behaviour needed by generic genetic operators.
///
/// Operators that receive a genome of unknown concrete type use
/// `new_prototype` to obtain a blank, structurally compatible instance (for
/// example a mutation scratch buffer) and `deep_copy` to duplicate one without
/// aliasing its storage.
pub trait Genome: Clone {
    /// Return an empty genome of the same concrete type as `self`.
    fn new_prototype(&self) -> Self;

    /// Return an independent copy of `self`.
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}
