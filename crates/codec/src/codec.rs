use serde::{Deserialize, Serialize};

use crate::bits::{packed_len, BitReader, BitWriter};
use crate::chromosome::Chromosome;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::quantizer::Quantizer;
use crate::traits::BitMapper;
use crate::{BitMapping, MAX_BITS, MIN_BITS};

/// Codec between real-valued vectors and packed binary chromosomes.
///
/// # How it works
///
/// 1.  **Quantize**: Each value is clamped to `[lo, hi]` and mapped to an
///     index in `0..=2^bits - 1`.
/// 2.  **Map**: The index becomes a `bits`-wide code word through the
///     configured [`BitMapping`] (natural or Gray binary).
/// 3.  **Pack**: Code words are concatenated in vector order, MSB first,
///     and the final byte is zero padded in its low bits.
///
/// Decoding reverses the three steps. An `n`-element vector always encodes
/// to exactly `ceil(n * bits / 8)` bytes, and [`VectorCodec::decode`]
/// refuses any chromosome of a different length.
///
/// The codec holds no mutable state and can be shared across threads.
///
/// # Examples
///
/// ```rust
/// # use genalg_codec::{BitMapping, VectorCodec};
/// let codec = VectorCodec::new(8, -100.0, 100.0, BitMapping::Gray).unwrap();
/// let chr = codec.encode(&[-150.0, 0.0, 150.0]);
/// assert_eq!(chr.len(), 3);
///
/// let values = codec.decode(&chr, 3).unwrap();
/// assert_eq!(values[0], -100.0);
/// assert!(values[1].abs() <= codec.precision());
/// assert_eq!(values[2], 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorCodec {
    config: CodecConfig,
    mapping: BitMapping,
}

impl VectorCodec {
    /// Create a codec, validating the bit width and bounds.
    pub fn new(
        bits_per_value: u32,
        lower_bound: f64,
        upper_bound: f64,
        mapping: BitMapping,
    ) -> Result<Self> {
        let config = CodecConfig::new(bits_per_value, lower_bound, upper_bound)?;
        Ok(Self::from_config(config, mapping))
    }

    /// Create a codec from an already validated configuration.
    pub fn from_config(config: CodecConfig, mapping: BitMapping) -> Self {
        log::debug!(
            "Vector codec: {} bits/value over [{}, {}] ({mapping})",
            config.bits_per_value(),
            config.lower_bound(),
            config.upper_bound()
        );
        Self { config, mapping }
    }

    /// Smallest supported bit width.
    pub const fn min_bits_per_value() -> u32 {
        MIN_BITS
    }

    /// Largest supported bit width.
    pub const fn max_bits_per_value() -> u32 {
        MAX_BITS
    }

    #[inline]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    #[inline]
    pub fn mapping(&self) -> BitMapping {
        self.mapping
    }

    /// Maximum reconstruction error of a decoded value.
    #[inline]
    pub fn precision(&self) -> f64 {
        self.config.step()
    }

    /// Byte length of the chromosome encoding `values` elements, or `None`
    /// if that many bits cannot be addressed.
    #[inline]
    pub fn encoded_len(&self, values: usize) -> Option<usize> {
        packed_len(values, self.config.bits_per_value())
    }

    #[inline]
    fn quantizer(&self) -> Quantizer {
        Quantizer::new(&self.config)
    }

    /// Encode `values` into a chromosome.
    ///
    /// Out-of-range values (and NaN) are clamped, never rejected.
    pub fn encode(&self, values: &[f64]) -> Chromosome {
        let bits = self.config.bits_per_value();
        let quantizer = self.quantizer();

        let capacity = self.encoded_len(values.len()).unwrap_or_default();
        let mut writer = BitWriter::with_capacity(capacity);
        for &value in values {
            let index = quantizer.quantize(value);
            writer.write(self.mapping.to_code(index, bits), bits);
        }
        let genes = writer.finish();

        log::trace!("Encoded {} values into {} bytes", values.len(), genes.len());
        Chromosome::from_bytes(genes)
    }

    /// Decode a chromosome holding `len` values.
    ///
    /// Fails before decoding anything if the chromosome is not exactly
    /// [`encoded_len(len)`](Self::encoded_len) bytes long
    /// ([`CodecError::LengthMismatch`]) or if `len` values cannot be
    /// addressed at all ([`CodecError::LengthOverflow`]). Padding bits in the
    /// final byte are ignored.
    pub fn decode(&self, chromosome: &Chromosome, len: usize) -> Result<Vec<f64>> {
        let bits = self.config.bits_per_value();
        let actual = chromosome.len();
        let expected = match self.encoded_len(len) {
            Some(expected) => expected,
            None => {
                let err = CodecError::LengthOverflow { values: len, bits };
                log::warn!("Rejecting chromosome: {err}");
                return Err(err);
            }
        };
        if actual != expected {
            let err = CodecError::LengthMismatch { expected, actual };
            log::warn!("Rejecting chromosome: {err}");
            return Err(err);
        }

        let quantizer = self.quantizer();
        let mut reader = BitReader::new(chromosome.as_bytes());

        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            // The exact length check guarantees `len * bits` readable bits
            let code = reader
                .read(bits)
                .ok_or(CodecError::LengthMismatch { expected, actual })?;
            let index = self.mapping.from_code(code, bits);
            values.push(quantizer.dequantize(index));
        }

        log::trace!("Decoded {} bytes into {} values", chromosome.len(), len);
        Ok(values)
    }
}
