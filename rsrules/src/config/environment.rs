//! Environment variable handling for configuration overrides.
//!
//! `RSRULES_*` variables override values from configuration files.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the rule-specification file.
pub const INPUT_VAR: &str = "RSRULES_INPUT";
/// Overrides the filter file.
pub const OUTPUT_VAR: &str = "RSRULES_OUTPUT";
/// Overrides echoing of written lines.
pub const ECHO_VAR: &str = "RSRULES_ECHO";
/// Overrides strict parsing.
pub const STRICT_VAR: &str = "RSRULES_STRICT";
/// Overrides atomic output.
pub const ATOMIC_VAR: &str = "RSRULES_ATOMIC";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rsrules::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Unset variables leave the corresponding field untouched. Path
    /// variables are taken verbatim, relative to the process working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a boolean variable holds an
    /// unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(input) = env::var_os(INPUT_VAR) {
            config.input = Some(PathBuf::from(input));
        }
        if let Some(output) = env::var_os(OUTPUT_VAR) {
            config.output = Some(PathBuf::from(output));
        }

        for (var, field) in [
            (ECHO_VAR, &mut config.echo),
            (STRICT_VAR, &mut config.strict),
            (ATOMIC_VAR, &mut config.atomic),
        ] {
            if let Ok(val) = env::var(var) {
                *field = Some(Self::parse_bool(var, &val)?);
            }
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
