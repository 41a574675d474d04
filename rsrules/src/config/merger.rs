//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rsrules::config::{Config, ConfigMerger};
///
/// let low = Config { strict: Some(false), echo: Some(true), ..Default::default() };
/// let high = Config { strict: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.strict, Some(true));
/// assert_eq!(result.echo, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target. Every field set in `source`
    /// replaces the value in `target`.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.input.is_some() {
            target.input.clone_from(&source.input);
        }
        if source.output.is_some() {
            target.output.clone_from(&source.output);
        }
        if source.echo.is_some() {
            target.echo = source.echo;
        }
        if source.strict.is_some() {
            target.strict = source.strict;
        }
        if source.atomic.is_some() {
            target.atomic = source.atomic;
        }
    }
}
