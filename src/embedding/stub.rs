use crate::embedding::provider::{EmbeddingProvider, EmbeddingVector};
use crate::foundation::error::MoodResult;
use async_trait::async_trait;
use rand::Rng;

/// Default stub dimensionality.
pub const STUB_DIMENSIONS: usize = 512;

/// Provider that ignores its input and returns a fresh vector uniformly drawn from `[-0.5, 0.5)`.
#[derive(Clone, Debug)]
pub struct StubEmbeddingProvider {
    dims: usize,
}

impl StubEmbeddingProvider {
    /// Stub producing `dims`-length vectors.
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl Default for StubEmbeddingProvider {
    fn default() -> Self {
        Self::new(STUB_DIMENSIONS)
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    async fn initialize(&self) -> MoodResult<()> {
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        true
    }

    async fn embed(&self, text: &str) -> MoodResult<EmbeddingVector> {
        tracing::debug!(len = text.len(), dims = self.dims, "stub embedding");
        let mut rng = rand::thread_rng();
        Ok((0..self.dims).map(|_| rng.gen_range(-0.5..0.5)).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embedding/stub.rs"]
mod tests;
