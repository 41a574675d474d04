//! Error types for the rsrules library.
//!
//! This module provides the error hierarchy for rule parsing, compilation
//! and filter-file output, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an rsrules error.
///
/// # Examples
///
/// ```
/// use rsrules::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rsrules library.
///
/// Every variant is fatal to the compilation call that produced it. A path
/// referenced by a rule that does not exist on disk is *not* an error; it
/// simply expands to nothing.
#[derive(Debug, Error)]
pub enum Error {
    /// A path token could not be normalized (for example, it was empty).
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending path token, as written.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The rule-specification file could not be opened or read.
    #[error("rule file not found: {}: {source}", path.display())]
    RuleFileNotFound {
        /// The rule file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The filter file could not be created or a write to it failed.
    #[error("cannot write filter file {}: {source}", path.display())]
    OutputWrite {
        /// The destination that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A rule line carried no recognized marker (strict parsing only).
    #[error("unrecognized rule on line {line}: '{content}'")]
    UnrecognizedRule {
        /// One-based line number in the rule source.
        line: usize,
        /// The trimmed content of the line.
        content: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates the rule file could not be found.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsrules::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::RuleFileNotFound {
    ///     path: PathBuf::from("/missing/rules.rsync"),
    ///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RuleFileNotFound { .. })
    }

    /// Check if error was raised while writing the filter file.
    #[must_use]
    pub fn is_output_error(&self) -> bool {
        matches!(self, Self::OutputWrite { .. })
    }
}
