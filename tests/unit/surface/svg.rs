use super::*;

#[test]
fn document_has_filters_background_and_three_circles_per_point() {
    let dims = Dimensions::new(200.0, 100.0).unwrap();
    let points = [Point::new(10.0, 20.0), Point::new(30.5, 40.0)];
    let colors = [Color::new(127, 127, 0), Color::new(0, 0, 255)];
    let svg = scene_svg(dims, [0, 0, 0], &points, &colors);

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="200" height="100""#));
    assert!(svg.contains(r#"<filter id="blur""#));
    assert!(svg.contains(r#"<filter id="coreBlur""#));
    assert!(svg.contains(r#"fill="rgb(0, 0, 0)""#));
    assert_eq!(svg.matches("<circle ").count(), 6);
    assert!(svg.contains(
        r#"<circle cx="10" cy="20" r="60" fill="rgb(127, 127, 0)" filter="url(#blur)" opacity="0.4"/>"#
    ));
    assert!(svg.contains(r#"<circle cx="30.5" cy="40" r="16" fill="rgb(50, 50, 255)"/>"#));
}

#[test]
fn mismatched_inputs_are_zipped() {
    let dims = Dimensions::new(50.0, 50.0).unwrap();
    let svg = scene_svg(dims, [0, 0, 0], &[Point::new(1.0, 1.0)], &[]);
    assert_eq!(svg.matches("<circle ").count(), 0);
}

#[test]
fn document_parses_as_svg() {
    let dims = Dimensions::new(64.0, 48.0).unwrap();
    let svg = scene_svg(dims, [10, 20, 30], &[Point::new(32.0, 24.0)], &[Color::new(200, 10, 10)]);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 64.0);
    assert_eq!(tree.size().height(), 48.0);
}
