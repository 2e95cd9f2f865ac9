use rayon::prelude::*;

use crate::chromosome::Chromosome;
use crate::codec::VectorCodec;
use crate::error::Result;

/// Batch encoding and decoding across a whole population.
///
/// # How it works
///
/// Each vector (or chromosome) is independent, so the batch is split across
/// the rayon thread pool and every worker runs the plain
/// [`VectorCodec::encode`] / [`VectorCodec::decode`] path. Output order always
/// matches input order.
///
/// # Why use this?
///
/// *   **Speed:** Worth it for large populations or long vectors.
/// *   **Overhead:** For a handful of short vectors the sequential calls are
///     cheaper.
impl VectorCodec {
    /// Encode every vector in `batch`.
    pub fn encode_batch<V>(&self, batch: &[V]) -> Vec<Chromosome>
    where
        V: AsRef<[f64]> + Sync,
    {
        batch
            .par_iter()
            .map(|values| self.encode(values.as_ref()))
            .collect()
    }

    /// Decode every chromosome in `batch`, each holding `len` values.
    ///
    /// Fails if any chromosome has the wrong length.
    pub fn decode_batch(&self, batch: &[Chromosome], len: usize) -> Result<Vec<Vec<f64>>> {
        let decoded = batch
            .par_iter()
            .map(|chromosome| self.decode(chromosome, len))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Decoded batch of {} chromosomes", decoded.len());
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::BitMapping;
    use rand::Rng;

    #[test]
    fn test_batch_matches_sequential() {
        let codec = VectorCodec::new(11, -5.0, 5.0, BitMapping::Gray).unwrap();
        let mut rng = rand::thread_rng();
        let population: Vec<Vec<f64>> = (0..200)
            .map(|_| (0..17).map(|_| rng.gen_range(-6.0..6.0)).collect())
            .collect();

        let encoded = codec.encode_batch(population.as_slice());
        assert_eq!(encoded.len(), population.len());
        for (values, chr) in population.iter().zip(&encoded) {
            assert_eq!(chr, &codec.encode(values));
        }

        let decoded = codec.decode_batch(&encoded, 17).unwrap();
        for (chr, values) in encoded.iter().zip(&decoded) {
            assert_eq!(values, &codec.decode(chr, 17).unwrap());
        }
    }

    #[test]
    fn test_batch_empty() {
        let codec = VectorCodec::new(4, 0.0, 1.0, BitMapping::Natural).unwrap();
        let empty: &[Vec<f64>] = &[];
        assert!(codec.encode_batch(empty).is_empty());
        assert!(codec.decode_batch(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_batch_rejects_bad_member() {
        let codec = VectorCodec::new(8, 0.0, 1.0, BitMapping::Natural).unwrap();
        let mut batch = codec.encode_batch(&[[0.1, 0.2], [0.3, 0.4]]);
        batch.push(Chromosome::with_len(5));

        let err = codec.decode_batch(&batch, 2).unwrap_err();
        assert_eq!(
            err,
            CodecError::LengthMismatch {
                expected: 2,
                actual: 5
            }
        );
    }
}
