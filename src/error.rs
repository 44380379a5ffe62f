use std::{error::Error as StdError, fmt};

/// A common error type.
#[derive(Debug, PartialEq)]
pub struct Error {
    description: String,
}

impl Error {
    /// Construct a new `Error` using the provided description.
    pub fn new<T: Into<String>>(description: T) -> Error {
        Error {
            description: description.into(),
        }
    }

    /// Construct a new `Error` using the provided cause's description.
    pub fn from_cause<T: StdError>(cause: T) -> Error {
        Error {
            description: format!("{}", cause),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl StdError for Error {}

/// Marker trait for cause types that convert into an `Error`.
pub trait IntoError: fmt::Display {}

impl<T: IntoError> From<T> for Error {
    fn from(cause: T) -> Error {
        Error::new(format!("{}", cause))
    }
}

impl IntoError for &str {}
impl IntoError for String {}
impl IntoError for std::num::ParseIntError {}

/// A common result type.
pub type Result<T> = std::result::Result<T, Error>;
