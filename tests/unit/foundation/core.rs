use super::*;

#[test]
fn dimensions_reject_non_positive_sides() {
    assert!(Dimensions::new(0.0, 10.0).is_err());
    assert!(Dimensions::new(10.0, -1.0).is_err());
    assert!(Dimensions::new(f64::NAN, 10.0).is_err());
    let d = Dimensions::new(300.0, 200.0).unwrap();
    assert_eq!(d.center(), Point::new(150.0, 100.0));
    assert_eq!(d.min_side(), 200.0);
}

#[test]
fn rgb_arithmetic_is_channelwise() {
    let a = Rgb::new(1.0, 2.0, 3.0);
    let mut b = a * 2.0;
    assert_eq!(b, Rgb::new(2.0, 4.0, 6.0));
    b += a;
    assert_eq!(b, Rgb::new(3.0, 6.0, 9.0));
    assert_eq!(Rgb::splat(100.0, 50.0, 10.0, 0.5), Rgb::new(50.0, 25.0, 5.0));
}

#[test]
fn color_floors_without_clamping() {
    let c = Color::floor_from(Rgb::new(127.5, -0.5, 300.9));
    assert_eq!(c, Color::new(127, -1, 300));
}

#[test]
fn color_maps_non_finite_channels_to_zero() {
    let c = Color::floor_from(Rgb::new(f64::NAN, f64::INFINITY, 1.0));
    assert_eq!(c, Color::new(0, 0, 1));
}

#[test]
fn to_rgb8_clamps_into_byte_range() {
    assert_eq!(Color::new(-20, 128, 999).to_rgb8(), [0, 128, 255]);
}
