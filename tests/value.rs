//! Tests for argument rendering.

use echolog::{LogValue, Point};

#[test]
fn renders_primitives() {
    assert_eq!("plain".render(), "plain");
    assert_eq!(String::from("owned").render(), "owned");
    assert_eq!(true.render(), "true");
    assert_eq!(false.render(), "false");
    assert_eq!(42_i32.render(), "42");
    assert_eq!((-7_i64).render(), "-7");
    assert_eq!(2.5_f64.render(), "2.5");
    assert_eq!('x'.render(), "x");
}

#[test]
fn renders_through_references() {
    let value = 99_u32;
    let reference = &value;
    assert_eq!(reference.render(), "99");
}

#[test]
fn renders_points_as_coordinate_pairs() {
    assert_eq!(Point::new(3.0, -1.5).render(), "{3; -1.5}");
    assert_eq!(Point::default().render(), "{0; 0}");
}
