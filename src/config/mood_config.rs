use crate::embedding::EmbeddingKind;
use crate::embedding::stub::STUB_DIMENSIONS;
use crate::foundation::core::Dimensions;
use crate::foundation::error::{MoodError, MoodResult};
use crate::layout::generator::LayoutKind;
use crate::weights::mechanism::WeightingMechanism;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Static configuration for a mood session.
///
/// Every field has a default, so `{}` is a complete config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoodConfig {
    /// How raw similarity scores become weights.
    pub mechanism: WeightingMechanism,
    /// Point layout.
    pub layout: LayoutKind,
    /// Embedding provider variant.
    pub embedding: EmbeddingKind,
    /// Embedding length produced by the provider.
    pub embedding_dims: usize,
    /// Initial canvas size.
    pub canvas: Dimensions,
    /// Fixed point count; derived from the canvas when unset.
    pub point_count: Option<usize>,
    /// Interval between animation ticks.
    pub frame_interval_ms: u64,
    /// Background color behind the points.
    pub background: [u8; 3],
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            mechanism: WeightingMechanism::default(),
            layout: LayoutKind::default(),
            embedding: EmbeddingKind::default(),
            embedding_dims: STUB_DIMENSIONS,
            canvas: Dimensions::default(),
            point_count: None,
            frame_interval_ms: 50,
            background: [0, 0, 0],
        }
    }
}

impl MoodConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MoodResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| MoodError::serde(format!("parse mood config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> MoodResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MoodResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MoodError::validation(format!("open mood config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check field ranges.
    pub fn validate(&self) -> MoodResult<()> {
        self.canvas.validate()?;
        if self.embedding_dims == 0 {
            return Err(MoodError::validation("embedding_dims must be > 0"));
        }
        if self.point_count == Some(0) {
            return Err(MoodError::validation("point_count must be > 0 when set"));
        }
        if self.frame_interval_ms == 0 {
            return Err(MoodError::validation("frame_interval_ms must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/mood_config.rs"]
mod tests;
