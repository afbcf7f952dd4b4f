use std::error::Error as StdError;
use std::{fmt, io};

/// Errors reported by the file response builder.
///
/// Both variants are caller-input errors: they are reported synchronously to
/// the caller and never retried or downgraded.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The file source could not be resolved into a readable stream.
    InvalidSource(io::Error),
    /// A Content-Disposition header was required but no filename was supplied.
    MissingFilename,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSource(error) => write!(f, "invalid file source: {}", error),
            Error::MissingFilename => write!(f, "missing filename for disposition header"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidSource(error) => Some(error),
            Error::MissingFilename => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::InvalidSource(error)
    }
}

/// Type alias for `Result` with the error type defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
