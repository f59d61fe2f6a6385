use crate::embedding::model::{ModelLoader, TextEncoder};
use crate::embedding::provider::EmbeddingVector;
use crate::foundation::error::{MoodError, MoodResult};
use crate::foundation::math::{Fnv1a64, magnitude};
use async_trait::async_trait;

/// Loader for [`HashingEncoder`].
#[derive(Clone, Debug)]
pub struct HashingLoader {
    dims: usize,
}

impl HashingLoader {
    /// Loader producing `dims`-length vectors.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

#[async_trait]
impl ModelLoader for HashingLoader {
    type Encoder = HashingEncoder;

    fn name(&self) -> &str {
        "hashing"
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    async fn load(&self) -> MoodResult<HashingEncoder> {
        if self.dims == 0 {
            return Err(MoodError::embedding(
                "hashing encoder needs at least one dimension",
            ));
        }
        Ok(HashingEncoder { dims: self.dims })
    }
}

/// Deterministic signed feature-hashing encoder.
///
/// Lowercased words contribute one unigram feature plus every character trigram of `" word "`.
/// Each feature lands in bucket `hash % dims` with sign taken from the top hash bit. The result
/// is L2-normalized; text without word characters yields the zero vector.
#[derive(Clone, Debug)]
pub struct HashingEncoder {
    dims: usize,
}

impl HashingEncoder {
    fn add_feature(&self, out: &mut [f64], salt: u8, bytes: &[u8]) {
        let mut h = Fnv1a64::new_default();
        h.write_u8(salt);
        h.write_bytes(bytes);
        let h = h.finish();
        let bucket = (h % self.dims as u64) as usize;
        let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
        out[bucket] += sign;
    }
}

impl TextEncoder for HashingEncoder {
    fn dimensions(&self) -> usize {
        self.dims
    }

    fn encode(&self, text: &str) -> MoodResult<EmbeddingVector> {
        let mut out = vec![0.0; self.dims];
        let lowered = text.to_lowercase();
        for word in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            self.add_feature(&mut out, b'w', word.as_bytes());

            let padded: Vec<char> = std::iter::once(' ')
                .chain(word.chars())
                .chain(std::iter::once(' '))
                .collect();
            let mut buf = [0u8; 12];
            for tri in padded.windows(3) {
                let mut len = 0;
                for c in tri {
                    len += c.encode_utf8(&mut buf[len..]).len();
                }
                self.add_feature(&mut out, b't', &buf[..len]);
            }
        }

        let norm = magnitude(&out);
        if norm > 0.0 {
            for v in &mut out {
                *v /= norm;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embedding/hashing.rs"]
mod tests;
