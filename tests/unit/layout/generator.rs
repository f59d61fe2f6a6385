use super::*;

const EPS: f64 = 1e-9;

fn dims(w: f64, h: f64) -> Dimensions {
    Dimensions::new(w, h).unwrap()
}

#[test]
fn circle_returns_n_points_on_the_radius() {
    let d = dims(900.0, 600.0);
    for n in [1usize, 2, 7, 50] {
        let pts = LayoutKind::Circle.generate(n, d).unwrap();
        assert_eq!(pts.len(), n);
        for p in pts {
            assert!((p.distance(d.center()) - 200.0).abs() < EPS);
        }
    }
}

#[test]
fn circle_starts_at_angle_zero() {
    let pts = LayoutKind::Circle.generate(4, dims(300.0, 300.0)).unwrap();
    assert!((pts[0].x - 250.0).abs() < EPS);
    assert!((pts[0].y - 150.0).abs() < EPS);
    assert!((pts[1].y - 250.0).abs() < EPS);
}

#[test]
fn line_spans_ten_to_ninety_percent() {
    let pts = LayoutKind::Line.generate(5, dims(1000.0, 400.0)).unwrap();
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![100.0, 300.0, 500.0, 700.0, 900.0]);
    assert!(pts.iter().all(|p| p.y == 200.0));
}

#[test]
fn single_point_line_sits_at_segment_start() {
    let pts = LayoutKind::Line.generate(1, dims(1000.0, 400.0)).unwrap();
    assert_eq!(pts, vec![Point::new(100.0, 200.0)]);
}

#[test]
fn concentric_circles_drop_the_remainder() {
    let d = dims(600.0, 600.0);
    let pts = LayoutKind::ConcentricCircles.generate(10, d).unwrap();
    assert_eq!(pts.len(), 8);

    let radii: Vec<f64> = pts.iter().map(|p| p.distance(d.center())).collect();
    for (ring, pair) in radii.chunks(2).enumerate() {
        let expected = 200.0 * (ring + 1) as f64 / 4.0;
        for r in pair {
            assert!((r - expected).abs() < EPS);
        }
    }
}

#[test]
fn concentric_circles_below_ring_count_are_empty() {
    let pts = LayoutKind::ConcentricCircles
        .generate(3, dims(100.0, 100.0))
        .unwrap();
    assert!(pts.is_empty());
}

#[test]
fn invalid_arguments_are_rejected() {
    assert!(LayoutKind::Circle.generate(0, dims(10.0, 10.0)).is_err());
    let bad = Dimensions {
        width: 0.0,
        height: 10.0,
    };
    assert!(LayoutKind::Line.generate(3, bad).is_err());
}

#[test]
fn point_count_scales_with_shorter_side() {
    assert_eq!(point_count_for(dims(320.0, 240.0)), 30);
    assert_eq!(point_count_for(dims(1920.0, 1080.0)), 54);
}

#[test]
fn layout_names_are_kebab_case() {
    let k: LayoutKind = serde_json::from_str("\"concentric-circles\"").unwrap();
    assert_eq!(k, LayoutKind::ConcentricCircles);
}
