use crate::patterns::library::PatternLibrary;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Per-pattern blend weights, in library enumeration order.
///
/// A map is always rebuilt wholesale; there is no in-place update API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightMap {
    entries: Vec<(String, f64)>,
}

impl WeightMap {
    /// `1/N` for each of the library's `N` patterns.
    pub fn uniform(library: &PatternLibrary) -> Self {
        let w = 1.0 / library.len() as f64;
        Self::from_pairs(library.names().map(|n| (n, w)))
    }

    /// Build from `(name, weight)` pairs, keeping their order.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self {
            entries: pairs.into_iter().map(|(n, w)| (n.into(), w)).collect(),
        }
    }

    /// Weight for `name`, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, w)| w)
    }

    /// Weight for `name`, treating a missing entry as 0.
    pub fn weight_of(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    /// `(name, weight)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, w)| (n.as_str(), *w))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}

impl Serialize for WeightMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (n, w) in &self.entries {
            map.serialize_entry(n, w)?;
        }
        map.end()
    }
}
