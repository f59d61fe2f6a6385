/// Convenience result type used across moodlights.
pub type MoodResult<T> = Result<T, MoodError>;

/// Top-level error taxonomy for the text-to-weight pipeline and its surfaces.
///
/// Everything raised while turning text into weights is recoverable: the session logs it and
/// keeps the last committed weights. The per-frame path has no error variants of its own.
#[derive(thiserror::Error, Debug)]
pub enum MoodError {
    /// Invalid configuration, layout arguments, or pattern library contents.
    #[error("validation error: {0}")]
    Validation(String),

    /// An embedding was requested before the provider finished initializing.
    #[error("embedding provider '{provider}' is not initialized")]
    NotInitialized {
        /// Name of the provider that refused the request.
        provider: String,
    },

    /// The embedding provider failed to produce a vector.
    #[error("embedding failure: {0}")]
    EmbeddingFailure(String),

    /// Cosine similarity is undefined for a zero-magnitude (or empty) common prefix.
    #[error("degenerate vector: zero magnitude over common prefix (len {len_a} vs {len_b})")]
    DegenerateVector {
        /// Length of the left-hand vector.
        len_a: usize,
        /// Length of the right-hand vector.
        len_b: usize,
    },

    /// Errors when serializing or deserializing configuration or reports.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while rasterizing or writing a rendered frame.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MoodError {
    /// Build a [`MoodError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MoodError::NotInitialized`] value.
    pub fn not_initialized(provider: impl Into<String>) -> Self {
        Self::NotInitialized {
            provider: provider.into(),
        }
    }

    /// Build a [`MoodError::EmbeddingFailure`] value.
    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::EmbeddingFailure(msg.into())
    }

    /// Build a [`MoodError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`MoodError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
