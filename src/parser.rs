use super::arc::*;
use super::sink::*;
use super::error::*;
use super::split::*;
use super::state::*;
use super::number::*;
use super::resolve::*;
use super::command::*;
use super::error_mode::*;

use std::mem;

///
/// Compiles SVG path data into calls to a path sink
///
/// The parser only holds configuration: each call to `compile_path` starts from a fresh state,
/// so one parser can be used for any number of paths.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PathParser {
    error_mode: ErrorMode
}

impl PathParser {
    ///
    /// Creates a parser with the default settings (unknown commands are ignored)
    ///
    pub fn new() -> PathParser {
        PathParser {
            error_mode: ErrorMode::default()
        }
    }

    ///
    /// Sets how this parser reacts to unknown commands
    ///
    pub fn with_error_mode(self, error_mode: ErrorMode) -> PathParser {
        PathParser { error_mode }
    }

    ///
    /// How this parser reacts to unknown commands
    ///
    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    ///
    /// Translates a path description string into calls to the sink
    ///
    /// Processing stops at the first error. Anything already sent to the sink stays there.
    ///
    pub fn compile_path<Sink: PathSink+?Sized>(&self, path: &str, sink: &mut Sink) -> Result<(), PathError> {
        let mut state = ParserState::new();

        for segment in split_path(path) {
            self.process_segment(&mut state, segment, sink)?;
        }

        Ok(())
    }

    ///
    /// Processes a single command from the path
    ///
    fn process_segment<Sink: PathSink+?Sized>(&self, state: &mut ParserState, segment: PathSegment, sink: &mut Sink) -> Result<(), PathError> {
        let command = PathCommand::from_letter(segment.letter);

        state.arguments.clear();
        read_numbers(segment.arguments, &mut state.arguments)?;

        if let PathCommand::Unknown(letter) = command {
            match self.error_mode {
                ErrorMode::Ignore   => { }
                ErrorMode::Warn     => { warn!("Ignoring svg path command '{}'", letter); }
                ErrorMode::Strict   => { return Err(PathError::UnknownCommand(letter)); }
            }

            state.arguments.clear();
            state.last_family = CurveFamily::Other;
            return Ok(());
        }

        if !command.accepts_arguments(state.arguments.len()) {
            return Err(PathError::ParamMismatch { command: segment.letter, num_args: state.arguments.len() });
        }

        trace!("{} {:?}", segment.letter, state.arguments);

        // The argument buffer is taken out of the state while the command updates the rest of it
        let mut args = mem::take(&mut state.arguments);

        if command.position() == Position::Relative {
            make_absolute(command, &mut args, state.cursor);
        }

        run_command(command, &args, state, sink);

        args.clear();
        state.arguments     = args;
        state.last_family   = command.family();

        Ok(())
    }
}

///
/// Makes the arguments of a relative command absolute
///
fn make_absolute(command: PathCommand, args: &mut [f64], cursor: (f64, f64)) {
    use self::PathCommand::*;

    match command {
        HLineTo(_)          => values_to_absolute(args, cursor.0),
        VLineTo(_)          => values_to_absolute(args, cursor.1),
        EllipticalArc(_)    => arc_points_to_absolute(args, cursor),
        ClosePath(_)        => { }
        Unknown(_)          => { }
        _                   => points_to_absolute(args, command.group_size(), cursor)
    }
}

///
/// Sends the primitives for a command with absolute arguments to the sink, updating the state
///
fn run_command<Sink: PathSink+?Sized>(command: PathCommand, args: &[f64], state: &mut ParserState, sink: &mut Sink) {
    use self::PathCommand::*;

    match command {
        MoveTo(_) => {
            // The first point starts a subpath, and any further points are lines
            let start           = (args[0], args[1]);

            sink.move_to(start.0, start.1);
            state.path_start    = start;
            state.cursor        = start;
            state.in_subpath    = true;

            for point in args[2..].chunks(2) {
                sink.line_to(point[0], point[1]);
                state.cursor = (point[0], point[1]);
            }
        }

        LineTo(_) => {
            for point in args.chunks(2) {
                sink.line_to(point[0], point[1]);
                state.cursor = (point[0], point[1]);
            }
            state.in_subpath = true;
        }

        HLineTo(_) => {
            for x in args.iter() {
                sink.line_to(*x, state.cursor.1);
                state.cursor.0 = *x;
            }
            state.in_subpath = true;
        }

        VLineTo(_) => {
            for y in args.iter() {
                sink.line_to(state.cursor.0, *y);
                state.cursor.1 = *y;
            }
            state.in_subpath = true;
        }

        CubicCurve(_) => {
            for curve in args.chunks(6) {
                sink.cubic_to(curve[0], curve[1], curve[2], curve[3], curve[4], curve[5]);
                state.control_point = (curve[2], curve[3]);
                state.cursor        = (curve[4], curve[5]);
            }
            state.in_subpath = true;
        }

        SmoothCubicCurve(_) => {
            for curve in args.chunks(4) {
                let (c1x, c1y) = state.reflected_control_point(CurveFamily::Cubic);

                sink.cubic_to(c1x, c1y, curve[0], curve[1], curve[2], curve[3]);
                state.control_point = (curve[0], curve[1]);
                state.cursor        = (curve[2], curve[3]);
                state.last_family   = CurveFamily::Cubic;
            }
            state.in_subpath = true;
        }

        QuadCurve(_) => {
            for curve in args.chunks(4) {
                sink.quad_to(curve[0], curve[1], curve[2], curve[3]);
                state.control_point = (curve[0], curve[1]);
                state.cursor        = (curve[2], curve[3]);
            }
            state.in_subpath = true;
        }

        SmoothQuadCurve(_) => {
            for point in args.chunks(2) {
                let control_point = state.reflected_control_point(CurveFamily::Quad);

                sink.quad_to(control_point.0, control_point.1, point[0], point[1]);
                state.control_point = control_point;
                state.cursor        = (point[0], point[1]);
                state.last_family   = CurveFamily::Quad;
            }
            state.in_subpath = true;
        }

        EllipticalArc(_) => {
            for arc_args in args.chunks(7) {
                let arc = SvgArc::from_arguments(arc_args);

                for op in arc.to_path_ops(state.cursor) {
                    sink.draw(op);
                }

                state.cursor        = arc.end;
                state.control_point = arc.end;
            }
            state.in_subpath = true;
        }

        ClosePath(_) => {
            if state.in_subpath {
                sink.close_path();
                state.cursor        = state.path_start;
                state.in_subpath    = false;
            }
        }

        Unknown(_) => { }
    }
}

///
/// Translates a path description string into calls to the sink, ignoring unknown commands
///
pub fn compile_path<Sink: PathSink+?Sized>(path: &str, sink: &mut Sink) -> Result<(), PathError> {
    PathParser::new().compile_path(path, sink)
}
