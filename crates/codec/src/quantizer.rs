use crate::config::CodecConfig;

/// Uniform quantizer mapping `[lo, hi]` onto the indices `0..=2^bits - 1`.
///
/// Values outside the bounds are clamped before quantization; that is policy,
/// not an error. The reconstruction error of any in-range value is at most
/// half a quantization step, and both bounds reconstruct exactly.
///
/// # Examples
///
/// ```rust
/// # use genalg_codec::{CodecConfig, Quantizer};
/// let q = Quantizer::new(&CodecConfig::new(8, -100.0, 100.0).unwrap());
/// assert_eq!(q.quantize(-150.0), 0);
/// assert_eq!(q.quantize(100.0), 255);
/// assert_eq!(q.dequantize(255), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    lower: f64,
    upper: f64,
    range: f64,
    levels: u64,
}

impl Quantizer {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            lower: config.lower_bound(),
            upper: config.upper_bound(),
            range: config.upper_bound() - config.lower_bound(),
            levels: config.levels(),
        }
    }

    /// Largest index this quantizer produces.
    #[inline]
    pub fn levels(&self) -> u64 {
        self.levels
    }

    /// Quantization step (maximum reconstruction error).
    #[inline]
    pub fn step(&self) -> f64 {
        self.range / self.levels as f64
    }

    /// Clamp `value` into `[lo, hi]`. NaN clamps to `lo`.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.lower
        } else {
            value.clamp(self.lower, self.upper)
        }
    }

    /// Map `value` to `round((clamp(value) - lo) / (hi - lo) * levels)`.
    #[inline]
    pub fn quantize(&self, value: f64) -> u64 {
        let unit = (self.clamp(value) - self.lower) / self.range;
        let index = (unit * self.levels as f64).round() as u64;
        index.min(self.levels)
    }

    /// Map `index` back to `lo + index / levels * (hi - lo)`.
    ///
    /// Indices past `levels` saturate to `hi`.
    #[inline]
    pub fn dequantize(&self, index: u64) -> f64 {
        if index >= self.levels {
            return self.upper;
        }
        self.lower + (index as f64 / self.levels as f64) * self.range
    }
}
