// error.rs - Error taxonomy for the operation set.
//
// Three failure classes plus the argument-null case that only `contains`
// produces. "Not found" (-1) and "empty result" are success values and
// never appear here.

use std::fmt;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for the string operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A receiver buffer that must not be null was null.
    NullInput,
    /// A required secondary buffer was null.
    NullArgument {
        /// Name of the offending parameter.
        param: &'static str,
    },
    /// An offset or length argument violates the source's bounds.
    Range {
        /// Name of the offending parameter.
        param: &'static str,
    },
    /// An integer span is not a valid base-10 literal.
    Parse {
        /// The offending span, lossily decoded.
        span: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NullInput => write!(f, "input buffer is null"),
            Error::NullArgument { param } => write!(f, "argument is null: {}", param),
            Error::Range { param } => write!(f, "argument out of range: {}", param),
            Error::Parse { span } => write!(f, "invalid integer span: {:?}", span),
        }
    }
}

impl std::error::Error for Error {}
