pub mod hashing;
pub mod model;
pub mod provider;
pub mod similarity;
pub mod stub;

use crate::embedding::hashing::HashingLoader;
use crate::embedding::model::ModelEmbeddingProvider;
use crate::embedding::provider::EmbeddingProvider;
use crate::embedding::stub::StubEmbeddingProvider;
use std::sync::Arc;

/// Which embedding provider variant a session uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbeddingKind {
    /// Fresh pseudo-random vector per call; always ready.
    #[default]
    Stub,
    /// Deterministic feature-hashing encoder behind the model lifecycle.
    Hashing,
}

/// Construct the provider for `kind` producing `dims`-length vectors.
pub fn build_provider(kind: EmbeddingKind, dims: usize) -> Arc<dyn EmbeddingProvider> {
    match kind {
        EmbeddingKind::Stub => Arc::new(StubEmbeddingProvider::new(dims)),
        EmbeddingKind::Hashing => Arc::new(ModelEmbeddingProvider::new(HashingLoader::new(dims))),
    }
}
