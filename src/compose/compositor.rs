use crate::foundation::core::{Color, Rgb};
use crate::patterns::library::PatternLibrary;
use crate::weights::map::WeightMap;
use std::sync::Arc;

/// Blends every pattern's color for a point by the current weights.
#[derive(Clone, Debug)]
pub struct Compositor {
    library: Arc<PatternLibrary>,
}

impl Compositor {
    /// Compositor over `library`.
    pub fn new(library: Arc<PatternLibrary>) -> Self {
        Self { library }
    }

    /// Weighted channel sum before flooring.
    pub fn blend(
        &self,
        point_index: usize,
        time: u64,
        total_points: usize,
        weights: &WeightMap,
    ) -> Rgb {
        let mut acc = Rgb::BLACK;
        for p in self.library.iter() {
            acc += p.color_at(point_index, time, total_points) * weights.weight_of(&p.name);
        }
        acc
    }

    /// Floored blend for one point. Channels are finite but not clamped.
    pub fn color_at(
        &self,
        point_index: usize,
        time: u64,
        total_points: usize,
        weights: &WeightMap,
    ) -> Color {
        Color::floor_from(self.blend(point_index, time, total_points, weights))
    }

    /// Colors for points `0..point_count` at `time`.
    ///
    /// `total_points` is what the patterns see; it can exceed `point_count` when a layout drops
    /// points.
    pub fn colors(
        &self,
        point_count: usize,
        time: u64,
        total_points: usize,
        weights: &WeightMap,
    ) -> Vec<Color> {
        (0..point_count)
            .map(|i| self.color_at(i, time, total_points, weights))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
