use crate::embedding::provider::EmbeddingProvider;
use crate::embedding::similarity::cosine_similarity;
use crate::foundation::error::MoodResult;
use crate::patterns::library::PatternLibrary;
use crate::weights::map::WeightMap;
use crate::weights::mechanism::{RawScore, WeightingMechanism};
use std::sync::Arc;

/// Turns free text into a [`WeightMap`] over a pattern library.
pub struct WeightResolver {
    library: Arc<PatternLibrary>,
    provider: Arc<dyn EmbeddingProvider>,
    mechanism: WeightingMechanism,
}

impl WeightResolver {
    /// Resolver over `library`, embedding with `provider`.
    pub fn new(
        library: Arc<PatternLibrary>,
        provider: Arc<dyn EmbeddingProvider>,
        mechanism: WeightingMechanism,
    ) -> Self {
        Self {
            library,
            provider,
            mechanism,
        }
    }

    /// Configured mechanism.
    pub fn mechanism(&self) -> WeightingMechanism {
        self.mechanism
    }

    /// The pattern library weights are defined over.
    pub fn library(&self) -> &Arc<PatternLibrary> {
        &self.library
    }

    /// The embedding provider.
    pub fn provider(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.provider
    }

    /// `cosine_similarity(embedding, pattern) * match_weight` for every pattern, in order.
    pub fn raw_scores(&self, embedding: &[f64]) -> Vec<RawScore> {
        self.library
            .iter()
            .map(|p| RawScore {
                name: p.name.clone(),
                score: cosine_similarity(embedding, &p.embedding) * p.match_weight,
            })
            .collect()
    }

    /// Resolve `text` into weights.
    ///
    /// Empty or whitespace-only text yields the uniform distribution without consulting the
    /// provider, whatever the mechanism.
    ///
    /// # Errors
    ///
    /// Propagates provider failures ([`crate::MoodError::NotInitialized`],
    /// [`crate::MoodError::EmbeddingFailure`]). Callers keep their previous weights.
    #[tracing::instrument(skip(self), fields(mechanism = ?self.mechanism))]
    pub async fn resolve(&self, text: &str) -> MoodResult<WeightMap> {
        if text.trim().is_empty() {
            return Ok(WeightMap::uniform(&self.library));
        }

        let embedding = self.provider.embed(text).await?;
        let scores = self.raw_scores(&embedding);
        let weights = self.mechanism.apply(&scores);
        tracing::debug!(?scores, ?weights, "resolved weights");
        Ok(weights)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/weights/resolver.rs"]
mod tests;
