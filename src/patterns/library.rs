use crate::foundation::core::Rgb;
use crate::foundation::error::{MoodError, MoodResult};
use std::collections::HashSet;

/// Procedural color rule: `(point index, animation time, total points) -> color`.
///
/// Must be total over `index >= 0`, `time >= 0`, `total_points >= 1` and return finite channels.
pub type ColorFn = fn(usize, u64, usize) -> Rgb;

/// A named light pattern plus the metadata used for mood matching.
#[derive(Clone, Debug)]
pub struct Pattern {
    /// Unique key within a library.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Semantic embedding compared against embedded input text.
    pub embedding: Vec<f64>,
    /// Scalar applied to the similarity score before normalization.
    pub match_weight: f64,
    color_fn: ColorFn,
}

impl Pattern {
    /// Build a pattern with a match weight of 1.0.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        embedding: Vec<f64>,
        color_fn: ColorFn,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            embedding,
            match_weight: 1.0,
            color_fn,
        }
    }

    /// Override the match weight.
    pub fn with_match_weight(mut self, match_weight: f64) -> Self {
        self.match_weight = match_weight;
        self
    }

    /// Evaluate the pattern for one point. `total_points` is floored at 1.
    pub fn color_at(&self, index: usize, time: u64, total_points: usize) -> Rgb {
        (self.color_fn)(index, time, total_points.max(1))
    }
}

/// Serializable summary of a [`Pattern`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PatternInfo {
    /// Pattern name.
    pub name: String,
    /// Pattern description.
    pub description: String,
    /// Match weight.
    pub match_weight: f64,
    /// Embedding length.
    pub embedding_dims: usize,
}

/// Immutable, ordered registry of patterns.
///
/// Enumeration order is insertion order; it decides winner-take-all ties and the order of
/// every [`crate::WeightMap`].
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    /// Build a library, rejecting empty sets, duplicate names and malformed metadata.
    pub fn new(patterns: Vec<Pattern>) -> MoodResult<Self> {
        if patterns.is_empty() {
            return Err(MoodError::validation(
                "pattern library must contain at least one pattern",
            ));
        }

        let mut seen = HashSet::with_capacity(patterns.len());
        for p in &patterns {
            if p.name.is_empty() {
                return Err(MoodError::validation("pattern name must be non-empty"));
            }
            if !seen.insert(p.name.as_str()) {
                return Err(MoodError::validation(format!(
                    "duplicate pattern name '{}'",
                    p.name
                )));
            }
            if p.embedding.is_empty() || p.embedding.iter().any(|v| !v.is_finite()) {
                return Err(MoodError::validation(format!(
                    "pattern '{}' embedding must be non-empty and finite",
                    p.name
                )));
            }
            if !p.match_weight.is_finite() {
                return Err(MoodError::validation(format!(
                    "pattern '{}' match weight must be finite",
                    p.name
                )));
            }
        }

        Ok(Self { patterns })
    }

    /// The built-in mood palette.
    pub fn builtin() -> Self {
        Self {
            patterns: crate::patterns::palette::builtin_patterns(),
        }
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false for a constructed library.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Look a pattern up by name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Pattern names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name.as_str())
    }

    /// Summaries for listing.
    pub fn describe(&self) -> Vec<PatternInfo> {
        self.patterns
            .iter()
            .map(|p| PatternInfo {
                name: p.name.clone(),
                description: p.description.clone(),
                match_weight: p.match_weight,
                embedding_dims: p.embedding.len(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/library.rs"]
mod tests;
