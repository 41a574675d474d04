//! Logging infrastructure for the rsrules library.
//!
//! Library code reports diagnostics through the [`log`] facade. The
//! [`Logger`] here is the console backend: it writes to stderr, filters by a
//! three-step [`LogLevel`], and can be installed as the global `log` logger
//! so that `log::warn!` calls made during compilation reach the user.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{LevelFilter, Metadata, Record};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_VAR: &str = "RSRULES_LOG_MODE";

/// How much console output a run produces.
///
/// Ordered by verbosity, so `level >= LogLevel::Normal` reads naturally.
///
/// # Examples
///
/// ```
/// use rsrules::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output, including progress messages.
    Quiet,
    /// Progress messages, errors and warnings.
    Normal,
    /// Everything, including per-stage debug detail.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Accepts `quiet`, `normal` or `verbose` in any case.
    ///
    /// ```
    /// use rsrules::LogLevel;
    ///
    /// assert_eq!("VERBOSE".parse::<LogLevel>(), Ok(LogLevel::Verbose));
    /// assert!("debug".parse::<LogLevel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("unknown log mode '{s}', expected quiet, normal or verbose")),
        }
    }
}

impl LogLevel {
    /// The `log` crate filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// Console logger writing to stderr.
///
/// # Examples
///
/// ```
/// use rsrules::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.status("Processing rules file...");
/// logger.debug("Not printed below Verbose");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Logger that prints at `level` and below.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Install a copy of this logger as the global `log` backend.
    ///
    /// Only the first installation in a process takes effect; later calls
    /// return the error from [`log::set_logger`] and leave the existing
    /// backend in place.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_logger(Box::leak(Box::new(self)))?;
        log::set_max_level(self.level.filter());
        Ok(())
    }

    /// Logs an error message, unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message at Normal and Verbose levels.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs a progress message for the current run.
    ///
    /// Status messages are displayed at Normal and Verbose levels, without a
    /// severity prefix.
    pub fn status(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("{message}");
        }
    }

    /// Logs an informational message. Verbose only.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message. Verbose only.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            log::Level::Error => self.error(&message),
            log::Level::Warn => self.warn(&message),
            log::Level::Info => self.info(&message),
            log::Level::Debug | log::Level::Trace => self.debug(&message),
        }
    }

    fn flush(&self) {}
}

/// Choose the console logger for a run from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `RSRULES_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence. An
/// unparseable `RSRULES_LOG_MODE` is ignored.
///
/// # Examples
///
/// ```
/// use rsrules::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose || quiet {
        return Logger::new(if verbose { LogLevel::Verbose } else { LogLevel::Quiet });
    }

    env::var(LOG_MODE_VAR)
        .ok()
        .and_then(|mode| mode.parse().ok())
        .map_or_else(Logger::default, Logger::new)
}
