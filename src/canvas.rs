use super::sink::*;

use flo_canvas as canvas;
use flo_canvas::GraphicsContext;

///
/// Path sink that draws to a flo_canvas graphics context
///
/// The canvas only has cubic curves, so quadratic curves are raised to cubics. Coordinates are
/// converted to `f32` as they are sent.
///
pub struct CanvasSink<'a, Gc: GraphicsContext+?Sized> {
    gc:             &'a mut Gc,
    current_point:  (f64, f64),
    subpath_start:  (f64, f64)
}

impl<'a, Gc: GraphicsContext+?Sized> CanvasSink<'a, Gc> {
    ///
    /// Creates a sink that draws to the specified graphics context
    ///
    pub fn new(gc: &'a mut Gc) -> CanvasSink<'a, Gc> {
        CanvasSink {
            gc:             gc,
            current_point:  (0.0, 0.0),
            subpath_start:  (0.0, 0.0)
        }
    }

    #[inline]
    fn path_op(&mut self, op: canvas::PathOp) {
        self.gc.draw(canvas::Draw::Path(op));
    }
}

impl<'a, Gc: GraphicsContext+?Sized> PathSink for CanvasSink<'a, Gc> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.path_op(canvas::PathOp::Move(x as f32, y as f32));
        self.current_point = (x, y);
        self.subpath_start = (x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path_op(canvas::PathOp::Line(x as f32, y as f32));
        self.current_point = (x, y);
    }

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.path_op(canvas::PathOp::BezierCurve(((c1x as f32, c1y as f32), (c2x as f32, c2y as f32)), (x as f32, y as f32)));
        self.current_point = (x, y);
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        // Degree elevation: each cubic control point is 2/3 of the way from an end point to the quadratic one
        let (x0, y0)    = self.current_point;
        let c1          = (x0 + (cx-x0)*(2.0/3.0), y0 + (cy-y0)*(2.0/3.0));
        let c2          = (x + (cx-x)*(2.0/3.0), y + (cy-y)*(2.0/3.0));

        self.cubic_to(c1.0, c1.1, c2.0, c2.1, x, y);
    }

    fn close_path(&mut self) {
        self.path_op(canvas::PathOp::ClosePath);
        self.current_point = self.subpath_start;
    }
}
