///
/// A path sink receives the drawing primitives generated from path data
///
pub trait PathSink {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn close_path(&mut self);

    ///
    /// Sends a recorded path operation to this sink
    ///
    fn draw(&mut self, op: PathOp) {
        use self::PathOp::*;

        match op {
            Move(x, y)                                  => self.move_to(x, y),
            Line(x, y)                                  => self.line_to(x, y),
            BezierCurve(((c1x, c1y), (c2x, c2y)), (x, y)) => self.cubic_to(c1x, c1y, c2x, c2y, x, y),
            QuadraticCurve((cx, cy), (x, y))            => self.quad_to(cx, cy, x, y),
            ClosePath                                   => self.close_path()
        }
    }
}

///
/// A drawing primitive, as recorded by a `Vec<PathOp>` sink
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PathOp {
    /// Move to a new point, starting a subpath
    Move(f64, f64),

    /// Line to point
    Line(f64, f64),

    /// Cubic bezier curve to point: ((control point 1, control point 2), end point)
    BezierCurve(((f64, f64), (f64, f64)), (f64, f64)),

    /// Quadratic bezier curve to point: (control point, end point)
    QuadraticCurve((f64, f64), (f64, f64)),

    /// Closes the current subpath
    ClosePath
}

impl PathOp {
    ///
    /// The point this operation finishes at, if it has one
    ///
    pub fn end_point(&self) -> Option<(f64, f64)> {
        match self {
            PathOp::Move(x, y) | PathOp::Line(x, y) => Some((*x, *y)),
            PathOp::BezierCurve(_, end)             => Some(*end),
            PathOp::QuadraticCurve(_, end)          => Some(*end),
            PathOp::ClosePath                       => None
        }
    }

    ///
    /// True if every coordinate in this operation is finite
    ///
    pub fn is_finite(&self) -> bool {
        let finite = |(x, y): (f64, f64)| x.is_finite() && y.is_finite();

        match self {
            PathOp::Move(x, y) | PathOp::Line(x, y) => finite((*x, *y)),
            PathOp::BezierCurve((cp1, cp2), end)    => finite(*cp1) && finite(*cp2) && finite(*end),
            PathOp::QuadraticCurve(cp, end)         => finite(*cp) && finite(*end),
            PathOp::ClosePath                       => true
        }
    }
}

///
/// A Vec<PathOp> can be used as a sink for path primitives (just pushing the appropriate operations)
///
impl PathSink for Vec<PathOp> {
    #[inline] fn move_to(&mut self, x: f64, y: f64)                                             { self.push(PathOp::Move(x, y)); }
    #[inline] fn line_to(&mut self, x: f64, y: f64)                                             { self.push(PathOp::Line(x, y)); }
    #[inline] fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64)    { self.push(PathOp::BezierCurve(((c1x, c1y), (c2x, c2y)), (x, y))); }
    #[inline] fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64)                           { self.push(PathOp::QuadraticCurve((cx, cy), (x, y))); }
    #[inline] fn close_path(&mut self)                                                          { self.push(PathOp::ClosePath); }

    #[inline]
    fn draw(&mut self, op: PathOp) {
        self.push(op);
    }
}

impl<'a, Sink: PathSink+?Sized> PathSink for &'a mut Sink {
    #[inline] fn move_to(&mut self, x: f64, y: f64)                                             { (**self).move_to(x, y) }
    #[inline] fn line_to(&mut self, x: f64, y: f64)                                             { (**self).line_to(x, y) }
    #[inline] fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64)    { (**self).cubic_to(c1x, c1y, c2x, c2y, x, y) }
    #[inline] fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64)                           { (**self).quad_to(cx, cy, x, y) }
    #[inline] fn close_path(&mut self)                                                          { (**self).close_path() }
}

///
/// Sink that works out the bounding box of the points it is sent
///
/// Control points are included, so the result contains the path but may be larger than it.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PathBounds {
    bounds: Option<((f64, f64), (f64, f64))>
}

impl PathBounds {
    ///
    /// Creates an empty bounding box
    ///
    pub fn new() -> PathBounds {
        PathBounds { bounds: None }
    }

    ///
    /// The (min, max) corners of the points seen so far, or None if no points have been seen
    ///
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        self.bounds
    }

    fn add_point(&mut self, x: f64, y: f64) {
        self.bounds = Some(match self.bounds {
            None                                    => ((x, y), (x, y)),
            Some(((minx, miny), (maxx, maxy)))      => ((minx.min(x), miny.min(y)), (maxx.max(x), maxy.max(y)))
        });
    }
}

impl PathSink for PathBounds {
    fn move_to(&mut self, x: f64, y: f64) {
        self.add_point(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.add_point(x, y);
    }

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.add_point(c1x, c1y);
        self.add_point(c2x, c2y);
        self.add_point(x, y);
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.add_point(cx, cy);
        self.add_point(x, y);
    }

    fn close_path(&mut self) { }
}
