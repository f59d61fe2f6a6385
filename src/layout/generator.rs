use crate::foundation::core::{Dimensions, Point};
use crate::foundation::error::{MoodError, MoodResult};
use std::f64::consts::TAU;

/// Ring count used by [`LayoutKind::ConcentricCircles`].
pub const CONCENTRIC_RINGS: usize = 4;
/// Lower bound for [`point_count_for`].
pub const MIN_POINT_COUNT: usize = 30;
/// Screen units per point used by [`point_count_for`].
pub const POINT_SPACING: f64 = 20.0;

/// Point layout algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Evenly spaced around a circle of radius `min(w, h) / 3`.
    #[default]
    Circle,
    /// Evenly spaced on a horizontal segment from 10% to 90% of the width.
    Line,
    /// Four rings, `floor(n / 4)` points each; the remainder is dropped.
    ConcentricCircles,
}

impl LayoutKind {
    /// Generate points for `total_points` on a canvas of `dims`.
    ///
    /// # Errors
    ///
    /// [`MoodError::Validation`] when `total_points == 0` or either side is not positive.
    pub fn generate(self, total_points: usize, dims: Dimensions) -> MoodResult<Vec<Point>> {
        if total_points == 0 {
            return Err(MoodError::validation("layout needs at least one point"));
        }
        dims.validate()?;
        Ok(match self {
            Self::Circle => circle(total_points, dims),
            Self::Line => line(total_points, dims),
            Self::ConcentricCircles => concentric_circles(total_points, dims),
        })
    }
}

/// Point count for a canvas: `max(30, floor(min(w, h) / 20))`.
pub fn point_count_for(dims: Dimensions) -> usize {
    let by_size = (dims.min_side() / POINT_SPACING).floor().max(0.0) as usize;
    by_size.max(MIN_POINT_COUNT)
}

fn ring(center: Point, radius: f64, count: usize) -> impl Iterator<Item = Point> {
    (0..count).map(move |i| {
        let angle = (i as f64 / count as f64) * TAU;
        Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        )
    })
}

fn circle(n: usize, dims: Dimensions) -> Vec<Point> {
    ring(dims.center(), dims.min_side() / 3.0, n).collect()
}

fn line(n: usize, dims: Dimensions) -> Vec<Point> {
    let start_x = dims.width * 0.1;
    let end_x = dims.width * 0.9;
    let y = dims.height / 2.0;
    if n == 1 {
        return vec![Point::new(start_x, y)];
    }
    let step = (end_x - start_x) / (n - 1) as f64;
    (0..n)
        .map(|i| Point::new(start_x + step * i as f64, y))
        .collect()
}

fn concentric_circles(n: usize, dims: Dimensions) -> Vec<Point> {
    let per_ring = n / CONCENTRIC_RINGS;
    let center = dims.center();
    let max_radius = dims.min_side() / 3.0;
    (0..CONCENTRIC_RINGS)
        .flat_map(|c| {
            let radius = max_radius * ((c + 1) as f64 / CONCENTRIC_RINGS as f64);
            ring(center, radius, per_ring)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/generator.rs"]
mod tests;
