use super::*;
use crate::patterns::library::Pattern;

fn red(_: usize, _: u64, _: usize) -> Rgb {
    Rgb::new(255.0, 0.0, 0.0)
}

fn green(_: usize, _: u64, _: usize) -> Rgb {
    Rgb::new(0.0, 255.0, 0.0)
}

fn ramp(index: usize, time: u64, total: usize) -> Rgb {
    Rgb::new(index as f64 + 0.75, time as f64 * 0.5, total as f64 - 0.25)
}

fn red_green() -> Compositor {
    Compositor::new(Arc::new(
        PatternLibrary::new(vec![
            Pattern::new("red", "", vec![1.0, 0.0], red),
            Pattern::new("green", "", vec![0.0, 1.0], green),
        ])
        .unwrap(),
    ))
}

#[test]
fn even_blend_floors_half_channels() {
    let c = red_green();
    let w = WeightMap::from_pairs([("red", 0.5), ("green", 0.5)]);
    assert_eq!(c.color_at(0, 0, 1, &w), Color::new(127, 127, 0));
}

#[test]
fn single_active_pattern_passes_through_floored() {
    let lib = Arc::new(
        PatternLibrary::new(vec![
            Pattern::new("a", "", vec![1.0], ramp),
            Pattern::new("b", "", vec![1.0], green),
        ])
        .unwrap(),
    );
    let c = Compositor::new(Arc::clone(&lib));
    let w = WeightMap::from_pairs([("a", 1.0), ("b", 0.0)]);
    for (i, t, n) in [(0usize, 0u64, 1usize), (3, 7, 10), (9, 1001, 12)] {
        let expected = Color::floor_from(lib.get("a").unwrap().color_at(i, t, n));
        assert_eq!(c.color_at(i, t, n, &w), expected);
    }
}

#[test]
fn unnormalized_weights_may_exceed_byte_range() {
    let c = red_green();
    let w = WeightMap::from_pairs([("red", 2.0), ("green", -1.0)]);
    assert_eq!(c.color_at(0, 0, 1, &w), Color::new(510, -255, 0));
}

#[test]
fn missing_weight_counts_as_zero() {
    let c = red_green();
    let w = WeightMap::from_pairs([("red", 1.0)]);
    assert_eq!(c.color_at(0, 0, 1, &w), Color::new(255, 0, 0));
}

#[test]
fn colors_covers_requested_points() {
    let c = red_green();
    let w = WeightMap::from_pairs([("red", 1.0), ("green", 1.0)]);
    let colors = c.colors(8, 3, 10, &w);
    assert_eq!(colors.len(), 8);
    assert!(colors.iter().all(|&col| col == Color::new(255, 255, 0)));
}

#[test]
fn builtin_palette_blend_is_finite() {
    let lib = Arc::new(PatternLibrary::builtin());
    let w = WeightMap::uniform(&lib);
    let c = Compositor::new(lib);
    for t in [0u64, 1, 250, 10_000] {
        let rgb = c.blend(4, t, 30, &w);
        assert!(rgb.is_finite());
    }
}
