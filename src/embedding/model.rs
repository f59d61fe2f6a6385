use crate::embedding::provider::{EmbeddingProvider, EmbeddingVector};
use crate::foundation::error::{MoodError, MoodResult};
use async_trait::async_trait;
use tokio::sync::OnceCell;

/// A loaded text encoder. Treated as a black box: UTF-8 text in, fixed-length vector out.
pub trait TextEncoder: Send + Sync {
    /// Output length.
    fn dimensions(&self) -> usize;

    /// Encode one text.
    fn encode(&self, text: &str) -> MoodResult<EmbeddingVector>;
}

/// Loads a [`TextEncoder`] once, asynchronously.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Encoder type produced by [`ModelLoader::load`].
    type Encoder: TextEncoder;

    /// Name used in logs and `NotInitialized` errors.
    fn name(&self) -> &str;

    /// Output length the loaded encoder will report.
    fn dimensions(&self) -> usize;

    /// Load weights or other resources.
    async fn load(&self) -> MoodResult<Self::Encoder>;
}

/// Model-backed provider with an explicit init-before-use lifecycle.
///
/// `embed` fails with [`MoodError::NotInitialized`] until `initialize` has completed. Concurrent
/// `initialize` calls load the model exactly once.
pub struct ModelEmbeddingProvider<L: ModelLoader> {
    loader: L,
    model: OnceCell<L::Encoder>,
}

impl<L: ModelLoader> ModelEmbeddingProvider<L> {
    /// Wrap `loader`; nothing is loaded until `initialize`.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            model: OnceCell::new(),
        }
    }
}

#[async_trait]
impl<L: ModelLoader> EmbeddingProvider for ModelEmbeddingProvider<L> {
    fn name(&self) -> &str {
        self.loader.name()
    }

    fn dimensions(&self) -> usize {
        self.model
            .get()
            .map(|m| m.dimensions())
            .unwrap_or_else(|| self.loader.dimensions())
    }

    async fn initialize(&self) -> MoodResult<()> {
        self.model
            .get_or_try_init(|| async {
                tracing::info!(provider = self.loader.name(), "loading embedding model");
                self.loader.load().await
            })
            .await?;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.model.initialized()
    }

    async fn embed(&self, text: &str) -> MoodResult<EmbeddingVector> {
        let model = self
            .model
            .get()
            .ok_or_else(|| MoodError::not_initialized(self.loader.name()))?;
        let v = model.encode(text)?;
        if v.len() != model.dimensions() {
            return Err(MoodError::embedding(format!(
                "model '{}' returned {} values, expected {}",
                self.loader.name(),
                v.len(),
                model.dimensions()
            )));
        }
        if v.iter().any(|x| !x.is_finite()) {
            return Err(MoodError::embedding(format!(
                "model '{}' returned non-finite values",
                self.loader.name()
            )));
        }
        Ok(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embedding/model.rs"]
mod tests;
