extern crate flo_svg_path;

use flo_svg_path::*;
use flo_svg_path::PathOp::*;

fn compile(path: &str) -> Vec<PathOp> {
    let mut ops: Vec<PathOp> = vec![];
    compile_path(path, &mut ops).unwrap();

    ops
}

#[test]
fn cubic_curve() {
    assert!(compile("M0 0 C10 0 20 10 20 20") == vec![Move(0.0, 0.0), BezierCurve(((10.0, 0.0), (20.0, 10.0)), (20.0, 20.0))]);
}

#[test]
fn relative_cubic_groups_follow_each_other() {
    assert!(compile("m10 10 c0 10 10 10 10 0 0 10 10 10 10 0") == vec![
        Move(10.0, 10.0),
        BezierCurve(((10.0, 20.0), (20.0, 20.0)), (20.0, 10.0)),
        BezierCurve(((20.0, 20.0), (30.0, 20.0)), (30.0, 10.0))
    ]);
}

#[test]
fn smooth_cubic_reflects_previous_control_point() {
    let ops = compile("M0 0 C10 0 20 10 20 20 S30 40 40 40");

    assert!(ops[2] == BezierCurve(((20.0, 30.0), (30.0, 40.0)), (40.0, 40.0)));
}

#[test]
fn relative_smooth_cubic() {
    let ops = compile("M0 0 c0 10 10 10 10 0 s10 -10 10 0");

    assert!(ops[1] == BezierCurve(((0.0, 10.0), (10.0, 10.0)), (10.0, 0.0)));
    assert!(ops[2] == BezierCurve(((10.0, -10.0), (20.0, -10.0)), (20.0, 0.0)));
}

#[test]
fn smooth_cubic_after_line_uses_cursor() {
    let ops = compile("M10 10 L20 20 S30 40 40 40");

    assert!(ops[2] == BezierCurve(((20.0, 20.0), (30.0, 40.0)), (40.0, 40.0)));
}

#[test]
fn smooth_cubic_after_quad_uses_cursor() {
    let ops = compile("M0 0 Q10 0 10 10 S20 20 20 10");

    assert!(ops[2] == BezierCurve(((10.0, 10.0), (20.0, 20.0)), (20.0, 10.0)));
}

#[test]
fn repeated_smooth_cubic_groups_reflect_each_other() {
    let ops = compile("M0 0 S10 10 20 0 30 -10 40 0");

    assert!(ops == vec![
        Move(0.0, 0.0),
        BezierCurve(((0.0, 0.0), (10.0, 10.0)), (20.0, 0.0)),
        BezierCurve(((30.0, -10.0), (30.0, -10.0)), (40.0, 0.0))
    ]);
}

#[test]
fn unknown_command_breaks_reflection() {
    let ops = compile("M0 0 C10 0 20 10 20 20 X S30 40 40 40");

    assert!(ops[2] == BezierCurve(((20.0, 20.0), (30.0, 40.0)), (40.0, 40.0)));
}

#[test]
fn quad_curve() {
    assert!(compile("M0 0 Q5 10 10 0 q5 10 10 0") == vec![
        Move(0.0, 0.0),
        QuadraticCurve((5.0, 10.0), (10.0, 0.0)),
        QuadraticCurve((15.0, 10.0), (20.0, 0.0))
    ]);
}

#[test]
fn smooth_quads_chain_reflections() {
    let ops = compile("M0 0 Q5 10 10 0 T20 0 T30 0");

    assert!(ops == vec![
        Move(0.0, 0.0),
        QuadraticCurve((5.0, 10.0), (10.0, 0.0)),
        QuadraticCurve((15.0, -10.0), (20.0, 0.0)),
        QuadraticCurve((25.0, 10.0), (30.0, 0.0))
    ]);
}

#[test]
fn relative_smooth_quad() {
    let ops = compile("M0 0 Q5 10 10 0 t10 0 10 0");

    assert!(ops[2] == QuadraticCurve((15.0, -10.0), (20.0, 0.0)));
    assert!(ops[3] == QuadraticCurve((25.0, 10.0), (30.0, 0.0)));
}

#[test]
fn smooth_quad_after_cubic_uses_cursor() {
    let ops = compile("M0 0 C10 0 20 10 20 20 T30 30");

    assert!(ops[2] == QuadraticCurve((20.0, 20.0), (30.0, 30.0)));
}

#[test]
fn curve_end_is_cursor() {
    let ops = compile("M0 0 C10 0 20 10 20 20 l5 0");

    assert!(ops[2] == Line(25.0, 20.0));
}
