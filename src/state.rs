use super::command::*;

///
/// The state threaded through the commands of a single path
///
#[derive(Clone, Debug, PartialEq)]
pub struct ParserState {
    /// The current point: the end of the last primitive sent to the sink
    pub cursor: (f64, f64),

    /// Where the current subpath started (the point a close returns to)
    pub path_start: (f64, f64),

    /// The final control point of the last curve
    pub control_point: (f64, f64),

    /// The family of the previous command
    pub last_family: CurveFamily,

    /// The arguments of the command being processed
    pub arguments: Vec<f64>,

    /// True if there's a subpath that has not been closed
    pub in_subpath: bool
}

impl ParserState {
    ///
    /// Creates the state for the start of a path
    ///
    pub fn new() -> ParserState {
        ParserState {
            cursor:         (0.0, 0.0),
            path_start:     (0.0, 0.0),
            control_point:  (0.0, 0.0),
            last_family:    CurveFamily::None,
            arguments:      vec![],
            in_subpath:     false
        }
    }

    ///
    /// Returns the control point to use for a smooth curve in the specified family
    ///
    /// This is the previous control point reflected about the cursor if the last command was in
    /// the same family, or the cursor itself otherwise.
    ///
    pub fn reflected_control_point(&self, family: CurveFamily) -> (f64, f64) {
        if self.last_family == family {
            let (px, py) = self.cursor;
            let (cx, cy) = self.control_point;

            (px*2.0 - cx, py*2.0 - cy)
        } else {
            self.cursor
        }
    }
}

impl Default for ParserState {
    fn default() -> ParserState {
        ParserState::new()
    }
}
