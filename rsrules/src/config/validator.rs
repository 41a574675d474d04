//! Configuration validation.

use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a configuration before it is used.
///
/// # Examples
///
/// ```
/// use rsrules::config::{Config, ConfigValidator};
/// use std::path::PathBuf;
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let clash = Config {
///     input: Some(PathBuf::from("rules.rsync")),
///     output: Some(PathBuf::from("rules.rsync")),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&clash).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// Both paths must be non-empty when set, and the effective output may
    /// not be the effective input: the filter file would overwrite the rules
    /// it was compiled from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref input) = config.input {
            Self::validate_path("input", input)?;
        }
        if let Some(ref output) = config.output {
            Self::validate_path("output", output)?;
        }

        let resolved = config.resolved();
        if resolved.input == resolved.output {
            return Err(Error::Validation {
                field: "output".into(),
                message: format!(
                    "output file {} is the same as the input file",
                    resolved.output.display()
                ),
            });
        }

        Ok(())
    }

    fn validate_path(field: &str, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "path cannot be empty".into(),
            });
        }
        if path.to_string_lossy().contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "path cannot contain null bytes".into(),
            });
        }
        Ok(())
    }
}
