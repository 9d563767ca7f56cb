use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised by [StatusWriter](crate::StatusWriter) and the formatters it drives.
#[derive(Debug)]
pub enum StatusError {
    /// The output stream is not attached to a terminal, so erasing the previous
    /// line has no meaning.
    InvalidStream,
    /// A structured record is missing a field the active formatter needs, or the
    /// field holds the wrong kind of value.
    InvalidMessage {
        field: &'static str,
        reason: &'static str,
    },
    /// The underlying stream failed.
    Io(io::Error),
}

impl StatusError {
    pub(crate) fn missing_field(field: &'static str) -> Self {
        Self::InvalidMessage {
            field,
            reason: "field is missing",
        }
    }

    pub(crate) fn wrong_kind(field: &'static str, expected: &'static str) -> Self {
        Self::InvalidMessage {
            field,
            reason: expected,
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusError::InvalidStream => {
                write!(f, "status output stream must be a terminal")
            }
            StatusError::InvalidMessage { field, reason } => {
                write!(f, "invalid status message: `{field}`: {reason}")
            }
            StatusError::Io(e) => write!(f, "status output failed: {e}"),
        }
    }
}

impl Error for StatusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StatusError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StatusError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
