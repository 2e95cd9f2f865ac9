use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};
use crate::{MAX_BITS, MIN_BITS};

/// Quantization settings shared by every value of a vector.
///
/// A `CodecConfig` can only be obtained through [`CodecConfig::new`] or by
/// deserializing one, and both paths validate it:
/// - `bits_per_value` lies in `[MIN_BITS, MAX_BITS]`
/// - both bounds are finite, `lower_bound < upper_bound`, and the width of
///   the range is itself finite
///
/// The configuration is not stored inside chromosomes; whoever persists a
/// genome must persist its config alongside it.
///
/// # Examples
///
/// ```rust
/// # use genalg_codec::CodecConfig;
/// let config = CodecConfig::new(8, -100.0, 100.0).unwrap();
/// assert_eq!(config.levels(), 255);
/// assert!(CodecConfig::new(8, 1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCodecConfig")]
pub struct CodecConfig {
    bits_per_value: u32,
    lower_bound: f64,
    upper_bound: f64,
}

impl CodecConfig {
    /// Create a validated configuration.
    pub fn new(bits_per_value: u32, lower_bound: f64, upper_bound: f64) -> Result<Self> {
        if !(MIN_BITS..=MAX_BITS).contains(&bits_per_value) {
            return Err(CodecError::InvalidBitsPerValue(bits_per_value));
        }

        let bounds_ok = lower_bound.is_finite()
            && upper_bound.is_finite()
            && lower_bound < upper_bound
            && (upper_bound - lower_bound).is_finite();
        if !bounds_ok {
            return Err(CodecError::InvalidBounds {
                lower: lower_bound,
                upper: upper_bound,
            });
        }

        Ok(Self {
            bits_per_value,
            lower_bound,
            upper_bound,
        })
    }

    #[inline]
    pub fn bits_per_value(&self) -> u32 {
        self.bits_per_value
    }

    #[inline]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[inline]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Largest quantized index, `2^bits - 1`.
    #[inline]
    pub fn levels(&self) -> u64 {
        (1u64 << self.bits_per_value) - 1
    }

    /// Quantization step, `(hi - lo) / (2^bits - 1)`.
    #[inline]
    pub fn step(&self) -> f64 {
        (self.upper_bound - self.lower_bound) / self.levels() as f64
    }
}

/// Unvalidated mirror used as the deserialization target.
#[derive(Deserialize)]
struct RawCodecConfig {
    bits_per_value: u32,
    lower_bound: f64,
    upper_bound: f64,
}

impl TryFrom<RawCodecConfig> for CodecConfig {
    type Error = CodecError;

    fn try_from(raw: RawCodecConfig) -> Result<Self> {
        CodecConfig::new(raw.bits_per_value, raw.lower_bound, raw.upper_bound)
    }
}
