//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps every failure to a stable
//! process exit code.

use std::fmt;

use rsrules::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error outside the library, such as writing to stdout.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., `check --strict` found problems) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (unrecognized rules in strict mode)
    /// - 3: Rule file not found
    /// - 4: Invalid arguments
    /// - 5: I/O or filter file write error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::UnrecognizedRule { .. } => 1,
                LibError::RuleFileNotFound { .. } => 3,
                LibError::OutputWrite { .. } | LibError::Io(_) => 5,
                LibError::Configuration(_) | LibError::Validation { .. } => 7,
                LibError::InvalidPath { .. } => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Configuration(source) => CliError::Config(source.to_string()),
            LibError::Validation { .. } => CliError::Config(e.to_string()),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let not_found = CliError::from(LibError::RuleFileNotFound {
            path: PathBuf::from("input_rules.rsync"),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert_eq!(not_found.exit_code(), 3);

        let output = CliError::from(LibError::OutputWrite {
            path: PathBuf::from("out.rsync"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });
        assert_eq!(output.exit_code(), 5);

        let unrecognized = CliError::from(LibError::UnrecognizedRule {
            line: 3,
            content: "oops".into(),
        });
        assert_eq!(unrecognized.exit_code(), 1);

        let invalid = CliError::from(LibError::InvalidPath {
            path: String::new(),
            reason: "empty".into(),
        });
        assert_eq!(invalid.exit_code(), 6);

        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_validation_becomes_config_error() {
        let err = CliError::from(LibError::Validation {
            field: "output".into(),
            message: "same as input".into(),
        });
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
