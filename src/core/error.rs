use std::{error, fmt};

/// Mirrors the plain enum-plus-`Display` error shape this crate's error
/// handling is grounded on (`meilidb-core::error::Error`): one variant per
/// failure case, each carrying its own context, no blanket `From` impls for
/// cases that can't arise here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidArgument(String),
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Error::InvalidArgument(context.into())
    }

    pub fn not_found(context: impl Into<String>) -> Self {
        Error::NotFound(context.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;
        match self {
            InvalidArgument(context) => write!(f, "invalid argument; {}", context),
            NotFound(context) => write!(f, "not found; {}", context),
        }
    }
}

impl error::Error for Error {}
