use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OutOfBounds;
use crate::traits::Genome;

/// A packed binary genome.
///
/// A `Chromosome` owns the bytes produced by [`VectorCodec::encode`]. It is
/// opaque to everything except the codec (and configuration) that produced
/// it: the bytes do not describe their own bit width, bounds or mapping.
///
/// Bits are addressed most-significant-first, matching the codec layout, so
/// bit `0` is the top bit of byte `0`. Genetic operators can mutate bits in
/// place through [`Chromosome::flip_bit`] and friends.
///
/// Equality, ordering and hashing consider the byte content only.
///
/// # Examples
///
/// ```rust
/// # use genalg_codec::{Chromosome, Genome};
/// let mut chr = Chromosome::from_bytes(vec![0b1000_0000]);
/// assert_eq!(chr.bit(0), Some(true));
/// chr.flip_bit(7).unwrap();
/// assert_eq!(chr.as_bytes(), &[0b1000_0001]);
///
/// let blank = chr.new_prototype();
/// assert!(blank.is_empty());
/// ```
///
/// [`VectorCodec::encode`]: crate::VectorCodec::encode
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chromosome {
    genes: Vec<u8>,
}

impl Chromosome {
    /// Create an empty chromosome.
    pub fn new() -> Self {
        Self { genes: Vec::new() }
    }

    /// Wrap `bytes` as a chromosome.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            genes: bytes.into(),
        }
    }

    /// Create a chromosome of `len` zero bytes.
    pub fn with_len(len: usize) -> Self {
        Self {
            genes: vec![0; len],
        }
    }

    /// Length in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Number of addressable bits (including any padding in the last byte).
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.genes.len() * 8
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.genes
    }

    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.genes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.genes
    }

    /// Return bit `index`, or `None` if it is out of range.
    #[inline]
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.genes
            .get(index / 8)
            .map(|byte| byte & Self::bit_mask(index) != 0)
    }

    /// Set bit `index` to `value`.
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<(), OutOfBounds> {
        let len = self.bit_len();
        let byte = self
            .genes
            .get_mut(index / 8)
            .ok_or(OutOfBounds { index, len })?;
        if value {
            *byte |= Self::bit_mask(index);
        } else {
            *byte &= !Self::bit_mask(index);
        }
        Ok(())
    }

    /// Invert bit `index`.
    pub fn flip_bit(&mut self, index: usize) -> Result<(), OutOfBounds> {
        let len = self.bit_len();
        self.genes
            .get_mut(index / 8)
            .map(|byte| *byte ^= Self::bit_mask(index))
            .ok_or(OutOfBounds { index, len })
    }

    /// Number of differing bits between two chromosomes of equal length.
    ///
    /// Returns `None` when the lengths differ.
    pub fn hamming_distance(&self, other: &Chromosome) -> Option<u32> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.genes
                .iter()
                .zip(&other.genes)
                .map(|(a, b)| (a ^ b).count_ones())
                .sum(),
        )
    }

    #[inline(always)]
    fn bit_mask(index: usize) -> u8 {
        0x80 >> (index % 8)
    }
}

impl Genome for Chromosome {
    fn new_prototype(&self) -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for Chromosome {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Chromosome {
    fn as_ref(&self) -> &[u8] {
        &self.genes
    }
}

/// Lowercase hex, two digits per byte.
impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.genes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
