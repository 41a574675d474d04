//! Configuration schema definitions.
//!
//! This module defines the configuration structure for rsrules: where the
//! rule file is read from, where the filter file is written, and how strict
//! parsing and output should be.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::rules::ParseMode;

/// Default rule-specification file name.
pub const DEFAULT_INPUT: &str = "input_rules.rsync";

/// Default filter file name.
pub const DEFAULT_OUTPUT: &str = "pattern_rules.rsync";

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered on top of each other. Use [`Config::resolved`] to fill in the
/// built-in defaults.
///
/// # Examples
///
/// ```
/// use rsrules::config::Config;
/// use std::path::PathBuf;
///
/// let config: Config = serde_yaml::from_str("input: rules.rsync\nstrict: true\n").unwrap();
/// assert_eq!(config.input, Some(PathBuf::from("rules.rsync")));
/// assert_eq!(config.strict, Some(true));
/// assert_eq!(config.output, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rule-specification file to read.
    pub input: Option<PathBuf>,

    /// Filter file to write.
    pub output: Option<PathBuf>,

    /// Mirror every written filter line to stdout.
    pub echo: Option<bool>,

    /// Reject rule lines without a recognized marker.
    pub strict: Option<bool>,

    /// Write the filter file through a temporary file and rename.
    pub atomic: Option<bool>,
}

impl Config {
    /// Fill unset fields with the built-in defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsrules::config::Config;
    /// use std::path::Path;
    ///
    /// let resolved = Config::default().resolved();
    /// assert_eq!(resolved.input, Path::new("input_rules.rsync"));
    /// assert_eq!(resolved.output, Path::new("pattern_rules.rsync"));
    /// assert!(!resolved.echo);
    /// assert!(!resolved.strict);
    /// assert!(resolved.atomic);
    /// ```
    #[must_use]
    pub fn resolved(&self) -> ResolvedConfig {
        ResolvedConfig {
            input: self
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            echo: self.echo.unwrap_or(false),
            strict: self.strict.unwrap_or(false),
            atomic: self.atomic.unwrap_or(true),
        }
    }

    /// Resolve relative `input` and `output` paths against `base`.
    ///
    /// Used for paths read from a configuration file, which are relative to
    /// the directory holding that file.
    pub(crate) fn anchor_paths(&mut self, base: &Path) {
        for path in [&mut self.input, &mut self.output].into_iter().flatten() {
            if path.is_relative() && !path.as_os_str().is_empty() {
                *path = base.join(&*path);
            }
        }
    }
}

/// A configuration with every default applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Rule-specification file to read.
    pub input: PathBuf,
    /// Filter file to write.
    pub output: PathBuf,
    /// Mirror written lines to stdout.
    pub echo: bool,
    /// Reject unrecognized rule lines.
    pub strict: bool,
    /// Write the filter file atomically.
    pub atomic: bool,
}

impl ResolvedConfig {
    /// Parse mode implied by the `strict` setting.
    #[must_use]
    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Config::default().resolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
input: rules/input_rules.rsync
output: /tmp/pattern_rules.rsync
echo: true
strict: true
atomic: false
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("rules/input_rules.rsync")));
        assert_eq!(config.output, Some(PathBuf::from("/tmp/pattern_rules.rsync")));
        assert_eq!(config.echo, Some(true));
        assert_eq!(config.strict, Some(true));
        assert_eq!(config.atomic, Some(false));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("destination: x\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_resolved_keeps_set_fields() {
        let config = Config {
            output: Some(PathBuf::from("out.rsync")),
            strict: Some(true),
            atomic: Some(false),
            ..Default::default()
        };
        let resolved = config.resolved();
        assert_eq!(resolved.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(resolved.output, PathBuf::from("out.rsync"));
        assert!(resolved.strict);
        assert!(!resolved.atomic);
        assert_eq!(resolved.parse_mode(), ParseMode::Strict);
    }

    #[test]
    fn test_default_parse_mode_is_lenient() {
        assert_eq!(ResolvedConfig::default().parse_mode(), ParseMode::Lenient);
    }

    #[test]
    fn test_anchor_paths() {
        let mut config = Config {
            input: Some(PathBuf::from("rules.rsync")),
            output: Some(PathBuf::from("/abs/out.rsync")),
            ..Default::default()
        };
        config.anchor_paths(Path::new("/projects/backup"));
        assert_eq!(
            config.input,
            Some(PathBuf::from("/projects/backup/rules.rsync"))
        );
        assert_eq!(config.output, Some(PathBuf::from("/abs/out.rsync")));
    }
}
