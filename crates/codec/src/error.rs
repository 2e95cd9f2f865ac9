use thiserror::Error;

use crate::{MAX_BITS, MIN_BITS};

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("Invalid bits per value: {0} (must be between {} and {})", MIN_BITS, MAX_BITS)]
    InvalidBitsPerValue(u32),
    #[error("Invalid bounds: [{lower}, {upper}] (bounds must be finite with lower < upper)")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Length overflow: {values} values of {bits} bits exceed the addressable size")]
    LengthOverflow { values: usize, bits: u32 },
}

impl CodecError {
    /// `true` for errors raised while constructing a codec.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidBitsPerValue(_) | Self::InvalidBounds { .. }
        )
    }

    /// `true` for errors raised because decode input does not match the layout.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. } | Self::LengthOverflow { .. }
        )
    }
}

/// Error returned when a bit index is outside a chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Bit {index} out of bounds (bit length = {len})")]
pub struct OutOfBounds {
    /// The bit index that was requested
    pub index: usize,

    /// The number of addressable bits
    pub len: usize,
}

pub type Result<T> = std::result::Result<T, CodecError>;
