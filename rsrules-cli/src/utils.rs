//! Utility functions for CLI operations.
//!
//! Configuration loading and progress output shared across commands.

use chrono::Local;
use rsrules::{init_logger, Config, ConfigBuilder, Logger, ResolvedConfig};

use crate::error::CliError;

/// Time-of-day format used in progress messages.
pub const PROGRESS_TIME_FORMAT: &str = "%H.%M.%S";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

impl GlobalOptions {
    /// Console logger for these options.
    pub fn logger(&self) -> Logger {
        init_logger(self.verbose, self.quiet)
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides`, highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(overrides: Config) -> Result<ResolvedConfig, CliError> {
    let config = ConfigBuilder::new().with_config(overrides).build()?;
    Ok(config.resolved())
}

/// Prefix `message` with the current local time, as `[HH.MM.SS]: message`.
pub fn timestamped(message: &str) -> String {
    format!("[{}]: {message}", Local::now().format(PROGRESS_TIME_FORMAT))
}

/// Print a timestamped progress message at Normal verbosity.
pub fn progress(logger: &Logger, message: &str) {
    logger.status(&timestamped(message));
}

/// Turn a boolean flag into an override: unset flags defer to configuration.
pub fn flag(set: bool) -> Option<bool> {
    set.then_some(true)
}
