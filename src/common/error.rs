//! Error types for paged.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// Every failure the pager can report today is an invalid argument supplied
/// by the caller. Out-of-range pages and cursors are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a value outside the accepted domain.
    InvalidArgument,
}

/// All possible errors in paged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A page length was zero, negative, or not an integer.
    ///
    /// Carries the rejected value as the caller wrote it.
    #[error("Page length must be a positive integer (got {0})")]
    InvalidPageLength(String),

    /// A page number was zero, negative, or not an integer.
    #[error("page number must be positive (got {0})")]
    InvalidPageNumber(String),
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPageLength(_) | Error::InvalidPageNumber(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

/// Lets already-validated values (`PageNumber` into `PageNumber`) flow
/// through the same generic `TryInto` bounds as raw integers.
impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
