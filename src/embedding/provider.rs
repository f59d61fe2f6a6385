use crate::foundation::error::MoodResult;
use async_trait::async_trait;

/// Ordered float vector representing the semantic content of a text.
pub type EmbeddingVector = Vec<f64>;

/// Converts free text into an [`EmbeddingVector`].
///
/// Every variant exposes the same lifecycle so call sites stay variant-agnostic: call
/// [`EmbeddingProvider::initialize`] once, gate input on [`EmbeddingProvider::is_initialized`],
/// then [`EmbeddingProvider::embed`]. Variants that need no setup treat `initialize` as a no-op.
///
/// # Errors
///
/// - [`crate::MoodError::NotInitialized`] when `embed` is called before `initialize` completed
/// - [`crate::MoodError::EmbeddingFailure`] when the backend cannot produce a vector
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &str;

    /// Native output length.
    fn dimensions(&self) -> usize;

    /// One-time setup. Idempotent.
    async fn initialize(&self) -> MoodResult<()>;

    /// Whether `embed` may be called.
    fn is_initialized(&self) -> bool;

    /// Embed one text.
    async fn embed(&self, text: &str) -> MoodResult<EmbeddingVector>;
}
