use crate::foundation::error::{MoodError, MoodResult};
use crate::foundation::math::{dot, magnitude};

/// Cosine similarity over the common prefix of `a` and `b`.
///
/// Both vectors are truncated to `min(a.len(), b.len())` first, so embeddings of different
/// dimensionality remain comparable.
///
/// # Errors
///
/// [`MoodError::DegenerateVector`] when either truncated vector has zero magnitude (including an
/// empty common prefix) or the result is not finite.
pub fn try_cosine_similarity(a: &[f64], b: &[f64]) -> MoodResult<f64> {
    let n = a.len().min(b.len());
    let (ta, tb) = (&a[..n], &b[..n]);
    let denom = magnitude(ta) * magnitude(tb);
    let sim = dot(ta, tb) / denom;
    if denom == 0.0 || !sim.is_finite() {
        return Err(MoodError::DegenerateVector {
            len_a: a.len(),
            len_b: b.len(),
        });
    }
    Ok(sim)
}

/// Like [`try_cosine_similarity`], but a degenerate pair scores `0.0`.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    match try_cosine_similarity(a, b) {
        Ok(sim) => sim,
        Err(err) => {
            tracing::debug!(%err, "treating degenerate similarity as 0");
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embedding/similarity.rs"]
mod tests;
