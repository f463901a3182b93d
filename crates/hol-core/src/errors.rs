//! Error types for holidays-rs.
//!
//! The holiday engines themselves are pure arithmetic; the only way they fail
//! is by being asked for a date outside the representable range. The remaining
//! variants belong to the boundary: configuration loading and export.
//! `ensure!`, `ensure_post!` and `fail!` are the shorthand used across the
//! workspace to raise them.

use thiserror::Error;

/// The top-level error type used throughout holidays-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Date-related error (out-of-range year, invalid month or day).
    #[error("date error: {0}")]
    Date(String),

    /// Run configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A record could not be serialized into an output format.
    #[error("serialization error ({format}): {message}")]
    Serialization {
        /// Output format that failed (`"json"`, `"yaml"`).
        format: &'static str,
        /// Underlying serializer message.
        message: String,
    },

    /// Filesystem error while writing output.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout holidays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn month(m: u8) -> hol_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hol_core::{ensure_post, errors::Error};
/// fn double(x: i32) -> hol_core::errors::Result<i32> {
///     let result = x * 2;
///     ensure_post!(result >= 0, "result must be non-negative, got {result}");
///     Ok(result)
/// }
/// assert!(double(1).is_ok());
/// assert!(double(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use hol_core::{fail, errors::Error};
/// fn always_err() -> hol_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err, Error::Io("gone".into()));
    }

    #[test]
    fn serialization_message() {
        let err = Error::Serialization {
            format: "yaml",
            message: "bad key".into(),
        };
        assert_eq!(err.to_string(), "serialization error (yaml): bad key");
    }
}
