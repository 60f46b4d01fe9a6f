use std::fmt;
use std::error::Error;

///
/// Errors that can occur while compiling path data
///
#[derive(Clone, Debug, PartialEq)]
pub enum PathError {
    /// Some numeric text could not be read as a number (the text is included)
    ParseFailure(String),

    /// A command was supplied with a number of arguments that is not a whole number of groups
    ParamMismatch { command: char, num_args: usize },

    /// An unrecognised command letter was found (only reported in strict mode)
    UnknownCommand(char)
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::PathError::*;

        match self {
            ParseFailure(text)                      => write!(f, "'{}' is not a valid number", text),
            ParamMismatch { command, num_args }     => write!(f, "Param mismatch: '{}' cannot take {} arguments", command, num_args),
            UnknownCommand(command)                 => write!(f, "Unknown command '{}'", command)
        }
    }
}

impl Error for PathError { }
