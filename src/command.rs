///
/// Whether or not the arguments to a command are relative to the cursor
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Absolute,
    Relative
}

///
/// The family of curves a command belongs to, used to decide whether a smooth curve can reflect
/// the previous control point
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    /// No command has been processed yet
    None,

    /// C or S
    Cubic,

    /// Q or T
    Quad,

    /// Any other command
    Other
}

///
/// A command from the SVG path mini-language
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathCommand {
    /// M, m: start a new subpath
    MoveTo(Position),

    /// L, l
    LineTo(Position),

    /// H, h: horizontal line
    HLineTo(Position),

    /// V, v: vertical line
    VLineTo(Position),

    /// C, c
    CubicCurve(Position),

    /// S, s: cubic curve with its first control point reflected from the previous curve
    SmoothCubicCurve(Position),

    /// Q, q
    QuadCurve(Position),

    /// T, t: quadratic curve with its control point reflected from the previous curve
    SmoothQuadCurve(Position),

    /// A, a
    EllipticalArc(Position),

    /// Z, z
    ClosePath(Position),

    /// Any other letter
    Unknown(char)
}

impl PathCommand {
    ///
    /// Returns the command represented by a letter
    ///
    pub fn from_letter(letter: char) -> PathCommand {
        use self::PathCommand::*;
        use self::Position::*;

        let position = if letter.is_ascii_lowercase() { Relative } else { Absolute };

        match letter.to_ascii_uppercase() {
            'M' => MoveTo(position),
            'L' => LineTo(position),
            'H' => HLineTo(position),
            'V' => VLineTo(position),
            'C' => CubicCurve(position),
            'S' => SmoothCubicCurve(position),
            'Q' => QuadCurve(position),
            'T' => SmoothQuadCurve(position),
            'A' => EllipticalArc(position),
            'Z' => ClosePath(position),
            _   => Unknown(letter)
        }
    }

    ///
    /// The letter that represents this command
    ///
    pub fn letter(&self) -> char {
        use self::PathCommand::*;

        let (letter, position) = match self {
            MoveTo(pos)             => ('M', *pos),
            LineTo(pos)             => ('L', *pos),
            HLineTo(pos)            => ('H', *pos),
            VLineTo(pos)            => ('V', *pos),
            CubicCurve(pos)         => ('C', *pos),
            SmoothCubicCurve(pos)   => ('S', *pos),
            QuadCurve(pos)          => ('Q', *pos),
            SmoothQuadCurve(pos)    => ('T', *pos),
            EllipticalArc(pos)      => ('A', *pos),
            ClosePath(pos)          => ('Z', *pos),
            Unknown(letter)         => return *letter
        };

        match position {
            Position::Absolute  => letter,
            Position::Relative  => letter.to_ascii_lowercase()
        }
    }

    ///
    /// The position of the arguments for this command (unknown commands are treated as absolute)
    ///
    pub fn position(&self) -> Position {
        use self::PathCommand::*;

        match self {
            MoveTo(pos) | LineTo(pos) | HLineTo(pos) | VLineTo(pos)
                | CubicCurve(pos) | SmoothCubicCurve(pos) | QuadCurve(pos) | SmoothQuadCurve(pos)
                | EllipticalArc(pos) | ClosePath(pos)   => *pos,
            Unknown(_)                                  => Position::Absolute
        }
    }

    ///
    /// The number of arguments consumed by one repetition of this command
    ///
    pub fn group_size(&self) -> usize {
        use self::PathCommand::*;

        match self {
            ClosePath(_) | Unknown(_)               => 0,
            HLineTo(_) | VLineTo(_)                 => 1,
            MoveTo(_) | LineTo(_)
                | SmoothQuadCurve(_)                => 2,
            SmoothCubicCurve(_) | QuadCurve(_)      => 4,
            CubicCurve(_)                           => 6,
            EllipticalArc(_)                        => 7
        }
    }

    ///
    /// The curve family this command belongs to
    ///
    pub fn family(&self) -> CurveFamily {
        use self::PathCommand::*;

        match self {
            CubicCurve(_) | SmoothCubicCurve(_) => CurveFamily::Cubic,
            QuadCurve(_) | SmoothQuadCurve(_)   => CurveFamily::Quad,
            _                                   => CurveFamily::Other
        }
    }

    ///
    /// True if a set of arguments of the specified length is valid for this command
    ///
    /// Commands that take arguments need at least one whole group; close takes none at all.
    ///
    pub fn accepts_arguments(&self, num_args: usize) -> bool {
        match self.group_size() {
            0           => num_args == 0,
            group_size  => num_args >= group_size && num_args % group_size == 0
        }
    }
}
