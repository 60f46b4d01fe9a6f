use std::fmt;
use std::str::FromStr;

///
/// Sets how the parser reacts to command letters it does not recognise
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorMode {
    /// Unknown commands are skipped silently
    Ignore,

    /// Unknown commands are skipped and a warning is logged
    Warn,

    /// Unknown commands stop the parse with an error
    Strict
}

impl Default for ErrorMode {
    fn default() -> ErrorMode {
        ErrorMode::Ignore
    }
}

impl FromStr for ErrorMode {
    type Err = String;

    fn from_str(mode: &str) -> Result<ErrorMode, String> {
        match mode.to_lowercase().as_str() {
            "ignore"    => Ok(ErrorMode::Ignore),
            "warn"      => Ok(ErrorMode::Warn),
            "strict"    => Ok(ErrorMode::Strict),
            _           => Err(format!("'{}' is not an error mode (expected one of ignore, warn or strict)", mode))
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorMode::Ignore   => write!(f, "ignore"),
            ErrorMode::Warn     => write!(f, "warn"),
            ErrorMode::Strict   => write!(f, "strict")
        }
    }
}
