//!
//! # Elliptical arcs
//!
//! SVG describes arcs by their end points, which is convenient for paths but not for drawing.
//! This converts them to the center parameterization described in the SVG implementation notes
//! and then approximates each quarter turn (or less) with a cubic bezier curve.
//!

use super::sink::*;

use std::f64::consts::PI;

///
/// The arguments to an elliptical arc command
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SvgArc {
    pub radius_x:           f64,
    pub radius_y:           f64,

    /// Rotation of the x-axis of the ellipse, in degrees
    pub x_axis_rotation:    f64,
    pub large_arc:          bool,
    pub sweep:              bool,
    pub end:                (f64, f64)
}

impl SvgArc {
    ///
    /// Reads an arc from a group of 7 (absolute) arc arguments
    ///
    pub fn from_arguments(args: &[f64]) -> SvgArc {
        SvgArc {
            radius_x:           args[0],
            radius_y:           args[1],
            x_axis_rotation:    args[2],
            large_arc:          args[3] != 0.0,
            sweep:              args[4] != 0.0,
            end:                (args[5], args[6])
        }
    }

    ///
    /// Generates the operations that draw this arc from the specified start point
    ///
    /// An arc whose end point is the start point draws nothing, and an arc with a zero radius
    /// is a straight line. So is an arc whose arguments are large enough to overflow the
    /// calculation. Otherwise the result is one or more bezier curves, the last of which ends
    /// exactly at the end point.
    ///
    pub fn to_path_ops(&self, start: (f64, f64)) -> Vec<PathOp> {
        let (x0, y0) = start;
        let (x1, y1) = self.end;

        if x0 == x1 && y0 == y1 {
            return vec![];
        }

        let mut rx = self.radius_x.abs();
        let mut ry = self.radius_y.abs();

        if rx == 0.0 || ry == 0.0 {
            return vec![PathOp::Line(x1, y1)];
        }

        let phi     = self.x_axis_rotation.to_radians();
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        // The midpoint between the two ends, in the coordinate space of the ellipse
        let dx2     = (x0 - x1) / 2.0;
        let dy2     = (y0 - y1) / 2.0;
        let x1p     = cos_phi * dx2 + sin_phi * dy2;
        let y1p     = -sin_phi * dx2 + cos_phi * dy2;

        // Radii that are too small to reach the end point are scaled up until they do
        let lambda  = (x1p*x1p)/(rx*rx) + (y1p*y1p)/(ry*ry);
        if !lambda.is_finite() {
            return vec![PathOp::Line(x1, y1)];
        }

        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // Center of the ellipse
        let rx2     = rx*rx;
        let ry2     = ry*ry;
        let num     = rx2*ry2 - rx2*y1p*y1p - ry2*x1p*x1p;
        let den     = rx2*y1p*y1p + ry2*x1p*x1p;
        let coef    = if den != 0.0 {
            let sign = if self.large_arc == self.sweep { -1.0 } else { 1.0 };
            sign * (num/den).max(0.0).sqrt()
        } else {
            0.0
        };

        let cxp     = coef * (rx * y1p / ry);
        let cyp     = coef * (-ry * x1p / rx);
        let cx      = cos_phi * cxp - sin_phi * cyp + (x0 + x1) / 2.0;
        let cy      = sin_phi * cxp + cos_phi * cyp + (y0 + y1) / 2.0;

        // Arguments near the limits of f64 can overflow: these arcs are drawn as lines
        if !coef.is_finite() || !cx.is_finite() || !cy.is_finite() {
            return vec![PathOp::Line(x1, y1)];
        }

        // Start angle and sweep
        let ux      = (x1p - cxp) / rx;
        let uy      = (y1p - cyp) / ry;
        let vx      = (-x1p - cxp) / rx;
        let vy      = (-y1p - cyp) / ry;

        let mut theta       = angle_between((1.0, 0.0), (ux, uy));
        let mut delta_theta = angle_between((ux, uy), (vx, vy));

        if !self.sweep && delta_theta > 0.0 {
            delta_theta -= 2.0 * PI;
        } else if self.sweep && delta_theta < 0.0 {
            delta_theta += 2.0 * PI;
        }

        // Each curve covers at most 90 degrees (allowing for rounding, so an exact quarter turn is one curve)
        let num_curves  = ((delta_theta.abs() / (PI / 2.0) - 1e-9).ceil() as usize).max(1);
        let step        = delta_theta / (num_curves as f64);
        let ellipse     = Ellipse { center: (cx, cy), radii: (rx, ry), sin_phi, cos_phi };

        let mut ops     = Vec::with_capacity(num_curves);
        for _ in 0..num_curves {
            let curve = ellipse.segment_to_bezier(theta, theta + step);
            if !curve.is_finite() {
                return vec![PathOp::Line(x1, y1)];
            }

            ops.push(curve);
            theta += step;
        }

        // Rounding errors can put the last curve slightly off the requested end point
        if let Some(PathOp::BezierCurve(_, end)) = ops.last_mut() {
            *end = self.end;
        }

        ops
    }
}

///
/// The signed angle from one vector to another
///
fn angle_between(u: (f64, f64), v: (f64, f64)) -> f64 {
    let dot = u.0*v.0 + u.1*v.1;
    let det = u.0*v.1 - u.1*v.0;

    det.atan2(dot)
}

///
/// An ellipse in center form
///
struct Ellipse {
    center:     (f64, f64),
    radii:      (f64, f64),
    sin_phi:    f64,
    cos_phi:    f64
}

impl Ellipse {
    ///
    /// Maps a point on the unit circle to this ellipse
    ///
    fn map(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let x = self.radii.0 * x;
        let y = self.radii.1 * y;

        (self.center.0 + self.cos_phi*x - self.sin_phi*y, self.center.1 + self.sin_phi*x + self.cos_phi*y)
    }

    ///
    /// Approximates the section of this ellipse between two angles with a bezier curve
    ///
    fn segment_to_bezier(&self, theta1: f64, theta2: f64) -> PathOp {
        let k           = (4.0/3.0) * ((theta2 - theta1) / 4.0).tan();
        let (s1, c1)    = theta1.sin_cos();
        let (s2, c2)    = theta2.sin_cos();

        let cp1         = self.map((c1 - k*s1, s1 + k*c1));
        let cp2         = self.map((c2 + k*s2, s2 - k*c2));
        let end         = self.map((c2, s2));

        PathOp::BezierCurve((cp1, cp2), end)
    }
}
