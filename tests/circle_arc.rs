#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use geoprim::geometry::{Bezier, Circle, Vector3d};
use geoprim::operations::{angle, area, distance, norm};
use std::f64::consts::{FRAC_PI_2, PI};

const QUARTER: Bezier<3, Vector3d, [Vector3d; 4]> = Bezier::from_array([
    Vector3d::new(1.0, 0.0, 0.0),
    Vector3d::new(1.0, 0.558, 0.0),
    Vector3d::new(0.558, 1.0, 0.0),
    Vector3d::new(0.0, 1.0, 0.0),
]);

const MIDPOINT: Vector3d = QUARTER.evaluate_at_const(0.5);

#[test]
fn midpoint_lies_near_the_unit_circle() {
    assert!(MIDPOINT.x > 0.0 && MIDPOINT.y > 0.0);
    assert_eq!(MIDPOINT.z, 0.0);
    assert!((norm(&MIDPOINT) - 1.0).abs() < 0.03);
}

#[test]
fn const_midpoint_matches_runtime_bits() {
    let runtime = QUARTER.evaluate_at(0.5);
    assert_eq!(MIDPOINT.x.to_bits(), runtime.x.to_bits());
    assert_eq!(MIDPOINT.y.to_bits(), runtime.y.to_bits());
    assert_eq!(MIDPOINT.z.to_bits(), runtime.z.to_bits());
}

#[test]
fn arc_spans_a_right_angle() {
    let start = QUARTER.evaluate_at(0.0);
    let end = QUARTER.evaluate_at(1.0);
    assert_relative_eq!(angle(&start, &end).unwrap(), FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(distance(&start, &end), 2.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn whole_arc_stays_close_to_radius() {
    let circle = Circle::new(Vector3d::default(), 1.0).unwrap();
    for k in 0..=32 {
        let p = QUARTER.evaluate_at(f64::from(k) / 32.0);
        let error = (distance(&p, circle.center()) - circle.radius()).abs();
        assert!(error < 0.03, "t = {k}/32, error {error}");
    }
    assert_relative_eq!(area(&circle), PI);
}
