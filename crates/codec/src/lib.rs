//! Real-vector chromosome encoding for genetic algorithms.
//!
//! Converts `f64` vectors into fixed-width binary genomes that genetic
//! operators can mutate and recombine, and converts those genomes back into
//! approximate real values.
//!
//! ```text
//! f64[] -> (clamp, quantize) -> index[] -> (bit-map) -> bitstream -> (pack) -> Chromosome
//! ```
//!
//! Two integer-to-bitstring mappings are provided as a [`BitMapping`]
//! strategy: natural binary and reflected (Gray) binary.

mod bits;
mod chromosome;
mod codec;
mod config;
mod error;
mod parallel;
mod quantizer;
mod strategies;
mod traits;

pub use chromosome::Chromosome;
pub use codec::VectorCodec;
pub use config::CodecConfig;
pub use error::CodecError as Error;
pub use error::{CodecError, OutOfBounds, Result};
pub use quantizer::Quantizer;
pub use strategies::{gray_decode, gray_encode, GrayBinary, NaturalBinary};
pub use traits::{BitMapper, Genome};

use serde::{Deserialize, Serialize};

/// Smallest supported number of bits per value.
pub const MIN_BITS: u32 = 1;

/// Largest supported number of bits per value.
///
/// Indices are carried in `u64` and `2^32 - 1` levels are still exactly
/// representable as `f64`.
pub const MAX_BITS: u32 = 32;

/// Integer-to-bitstring mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitMapping {
    /// Positional big-endian binary.
    Natural,
    /// Reflected binary; adjacent indices differ in exactly one bit.
    Gray,
}

impl Default for BitMapping {
    fn default() -> Self {
        Self::Gray
    }
}

impl std::fmt::Display for BitMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural => write!(f, "natural"),
            Self::Gray => write!(f, "gray"),
        }
    }
}

impl std::str::FromStr for BitMapping {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "natural" | "binary" => Ok(Self::Natural),
            "gray" | "reflected" => Ok(Self::Gray),
            _ => Err(format!(
                "Unknown bit mapping: {s}. Available: natural, gray"
            )),
        }
    }
}

/// Enum dispatch to the unit-struct strategies.
impl BitMapper for BitMapping {
    #[inline]
    fn to_code(&self, index: u64, bits: u32) -> u64 {
        match self {
            BitMapping::Natural => NaturalBinary.to_code(index, bits),
            BitMapping::Gray => GrayBinary.to_code(index, bits),
        }
    }

    #[inline]
    fn from_code(&self, code: u64, bits: u32) -> u64 {
        match self {
            BitMapping::Natural => NaturalBinary.from_code(code, bits),
            BitMapping::Gray => GrayBinary.from_code(code, bits),
        }
    }
}
