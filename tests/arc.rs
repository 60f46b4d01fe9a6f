extern crate flo_svg_path;

use flo_svg_path::*;
use flo_svg_path::PathOp::*;

fn compile(path: &str) -> Vec<PathOp> {
    let mut ops: Vec<PathOp> = vec![];
    compile_path(path, &mut ops).unwrap();

    ops
}

fn distance(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let (dx, dy) = (p1.0-p2.0, p1.1-p2.1);
    (dx*dx + dy*dy).sqrt()
}

fn curve_points(op: &PathOp) -> ((f64, f64), (f64, f64), (f64, f64)) {
    match op {
        BezierCurve((cp1, cp2), end)    => (*cp1, *cp2, *end),
        _                               => panic!("Expected a bezier curve, found {:?}", op)
    }
}

#[test]
fn quarter_circle_is_one_curve() {
    let ops = compile("M10 0 A10 10 0 0 1 0 10");

    assert!(ops.len() == 2);

    let (cp1, cp2, end) = curve_points(&ops[1]);
    assert!(distance(cp1, (10.0, 5.522847)) < 0.0001);
    assert!(distance(cp2, (5.522847, 10.0)) < 0.0001);
    assert!(end == (0.0, 10.0));
}

#[test]
fn half_circle_with_sweep() {
    let ops = compile("M0 0 A10 10 0 0 1 20 0");

    assert!(ops.len() == 3);

    let (_, _, mid) = curve_points(&ops[1]);
    let (_, _, end) = curve_points(&ops[2]);
    assert!(distance(mid, (10.0, -10.0)) < 0.0001);
    assert!(end == (20.0, 0.0));
}

#[test]
fn half_circle_without_sweep() {
    let ops = compile("M0 0 A10 10 0 0 0 20 0");

    let (_, _, mid) = curve_points(&ops[1]);
    assert!(distance(mid, (10.0, 10.0)) < 0.0001);
}

#[test]
fn large_arc_takes_long_way_round() {
    let ops = compile("M10 0 A10 10 0 1 0 0 10");

    assert!(ops.len() == 4);

    let (_, _, first) = curve_points(&ops[1]);
    let (_, _, end)   = curve_points(&ops[3]);
    assert!(distance(first, (0.0, -10.0)) < 0.0001);
    assert!(end == (0.0, 10.0));
}

#[test]
fn small_radii_are_scaled_up() {
    let ops = compile("M0 0 A1 1 0 0 1 20 0");

    let (_, _, mid) = curve_points(&ops[1]);
    assert!(distance(mid, (10.0, -10.0)) < 0.0001);
}

#[test]
fn rotated_ellipse_ends_at_end_point() {
    let ops = compile("M0 0 A20 10 45 0 1 30 10");

    for op in ops[1..].iter() {
        curve_points(op);
    }
    assert!(ops.last().and_then(|op| op.end_point()) == Some((30.0, 10.0)));
}

#[test]
fn relative_arc_moves_end_point_only() {
    let ops = compile("M10 10 a10 10 0 0 1 20 0");

    let (_, _, mid) = curve_points(&ops[1]);
    let (_, _, end) = curve_points(&ops[2]);
    assert!(distance(mid, (20.0, 0.0)) < 0.0001);
    assert!(end == (30.0, 10.0));
}

#[test]
fn zero_radius_is_a_line() {
    assert!(compile("M0 0 A0 10 0 0 1 20 0") == vec![Move(0.0, 0.0), Line(20.0, 0.0)]);
}

#[test]
fn arc_to_current_point_draws_nothing() {
    assert!(compile("M5 5 A10 10 0 0 1 5 5") == vec![Move(5.0, 5.0)]);
}

#[test]
fn arc_end_is_cursor() {
    let ops = compile("M0 0 A10 10 0 0 1 20 0 l5 5");

    assert!(ops.last() == Some(&Line(25.0, 5.0)));
}

#[test]
fn arc_with_two_groups() {
    let ops = compile("M0 0 A10 10 0 0 1 20 0 10 10 0 0 1 40 0");

    assert!(ops.len() == 5);
    assert!(ops[4].end_point() == Some((40.0, 0.0)));
}

#[test]
fn arc_directly() {
    let arc = SvgArc::from_arguments(&[10.0, 10.0, 0.0, 0.0, 1.0, 0.0, 10.0]);

    assert!(arc.sweep);
    assert!(!arc.large_arc);
    assert!(arc.to_path_ops((10.0, 0.0)).len() == 1);
}

#[test]
fn overflowing_arc_is_a_line() {
    let ops = compile("M0 0 A1e308 1e308 0 0 1 1e308 0");

    assert!(ops == vec![Move(0.0, 0.0), Line(1e308, 0.0)]);
    assert!(ops.iter().all(|op| op.is_finite()));
}

#[test]
fn overflowing_relative_arc_is_a_line() {
    let ops = compile("M-1e308 0 a1e308 1e308 0 1 0 1.5e308 1e308");

    assert!(ops.len() == 2);
    assert!(ops.iter().all(|op| op.is_finite()));
}
