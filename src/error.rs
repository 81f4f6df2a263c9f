//! Error types for PSON generation and parsing.
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose error
//! side is the single [`Error`] enum below.
//!
//! ## Error Categories
//!
//! - **Nesting Errors**: a value tree or document nested deeper than the configured limit
//! - **Generator Errors**: a value that has no PSON text form (e.g. `NaN` in strict mode)
//! - **Parse Errors**: malformed text or invalid UTF-8, with line/column/offset information
//! - **Raw Object Errors**: raw decoding was asked to decode something that is not a raw object
//! - **Option Errors**: a generation setting that would produce unparseable output
//!
//! ## Examples
//!
//! ```rust
//! use serde_pson::{from_pson, Error};
//!
//! let result = from_pson("[1, 2,");
//! assert!(matches!(result, Err(Error::Parse { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during PSON generation/parsing.
///
/// A failing call never returns partial output; the error is the whole result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Nesting deeper than the configured maximum
    #[error("nesting of {depth} is too deep (max_nesting is {max})")]
    Nesting { depth: usize, max: usize },

    /// A value that cannot be represented as PSON text
    #[error("generator error: {0}")]
    Generator(String),

    /// Malformed input text or invalid encoding
    #[error("parse error at line {line}, column {column} (offset {offset}): {message}")]
    Parse {
        line: usize,
        column: usize,
        offset: usize,
        message: String,
    },

    /// Raw decoding was applied to a value that is not a raw object
    #[error("invalid raw object: {0}")]
    InvalidRawObject(String),

    /// Rejected generation setting
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a nesting error for a depth that exceeded `max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pson::Error;
    ///
    /// let err = Error::nesting(3, 2);
    /// assert_eq!(err.to_string(), "nesting of 3 is too deep (max_nesting is 2)");
    /// ```
    pub fn nesting(depth: usize, max: usize) -> Self {
        Error::Nesting { depth, max }
    }

    /// Creates a generator error for a value without a text form.
    pub fn generator<T: fmt::Display>(msg: T) -> Self {
        Error::Generator(msg.to_string())
    }

    /// Creates a parse error at the given 1-based line and column.
    ///
    /// `offset` is the 0-based character offset of the same position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pson::Error;
    ///
    /// let err = Error::parse(2, 5, 9, "expected value");
    /// assert!(err.to_string().contains("line 2, column 5"));
    /// ```
    pub fn parse(line: usize, column: usize, offset: usize, msg: &str) -> Self {
        Error::Parse {
            line,
            column,
            offset,
            message: msg.to_string(),
        }
    }

    /// Creates an invalid raw object error.
    pub fn invalid_raw_object(msg: &str) -> Self {
        Error::InvalidRawObject(msg.to_string())
    }

    /// Creates an invalid option error.
    pub fn invalid_option(msg: &str) -> Self {
        Error::InvalidOption(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for [`Error::Nesting`].
    #[must_use]
    pub const fn is_nesting(&self) -> bool {
        matches!(self, Error::Nesting { .. })
    }

    /// Returns `true` for [`Error::Parse`].
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse(1, 7, 6, "EOF while parsing a list");
        assert_eq!(
            err.to_string(),
            "parse error at line 1, column 7 (offset 6): EOF while parsing a list"
        );
        assert!(err.is_parse());
        assert!(!err.is_nesting());
    }

    #[test]
    fn test_serde_custom_errors() {
        let err = <Error as serde::de::Error>::custom("missing field `id`");
        assert_eq!(err, Error::Custom("missing field `id`".to_string()));

        let err = <Error as serde::ser::Error>::custom("key must be a string");
        assert!(err.to_string().contains("key must be a string"));
    }
}
