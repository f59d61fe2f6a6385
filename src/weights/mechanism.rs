use crate::weights::map::WeightMap;

/// Offset added after shifting so the lowest weighted-mean score stays positive.
pub const WEIGHTED_MEAN_FLOOR: f64 = 0.1;

/// One pattern's similarity to the input, already scaled by its match weight.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RawScore {
    /// Pattern name.
    pub name: String,
    /// `cosine_similarity * match_weight`.
    pub score: f64,
}

/// Strategy turning raw scores into a [`WeightMap`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightingMechanism {
    /// Shift so the minimum is 0.1, then divide by the total. Sums to 1.
    #[default]
    WeightedMean,
    /// Divide by the maximum score. May not sum to 1 and may go negative.
    Normalized,
    /// The first strictly greatest score gets 1, everything else 0.
    WinnerTakeAll,
}

impl WeightingMechanism {
    /// Apply the mechanism. An empty score list yields an empty map.
    pub fn apply(self, scores: &[RawScore]) -> WeightMap {
        if scores.is_empty() {
            return WeightMap::default();
        }
        match self {
            Self::WeightedMean => weighted_mean(scores),
            Self::Normalized => normalized(scores),
            Self::WinnerTakeAll => winner_take_all(scores),
        }
    }
}

fn weighted_mean(scores: &[RawScore]) -> WeightMap {
    let min = scores.iter().map(|s| s.score).fold(f64::INFINITY, f64::min);
    let shift = -min + WEIGHTED_MEAN_FLOOR;
    let total: f64 = scores.iter().map(|s| s.score + shift).sum();
    WeightMap::from_pairs(
        scores
            .iter()
            .map(|s| (s.name.as_str(), (s.score + shift) / total)),
    )
}

fn normalized(scores: &[RawScore]) -> WeightMap {
    let max = scores
        .iter()
        .map(|s| s.score)
        .fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 {
        tracing::debug!("normalized mechanism hit a zero maximum; using uniform weights");
        let w = 1.0 / scores.len() as f64;
        return WeightMap::from_pairs(scores.iter().map(|s| (s.name.as_str(), w)));
    }
    WeightMap::from_pairs(scores.iter().map(|s| (s.name.as_str(), s.score / max)))
}

fn winner_take_all(scores: &[RawScore]) -> WeightMap {
    let mut winner = 0;
    for (i, s) in scores.iter().enumerate().skip(1) {
        if s.score > scores[winner].score {
            winner = i;
        }
    }
    WeightMap::from_pairs(
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.as_str(), if i == winner { 1.0 } else { 0.0 })),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/weights/mechanism.rs"]
mod tests;
