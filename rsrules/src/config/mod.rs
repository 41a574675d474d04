//! Configuration system for rsrules.
//!
//! Settings decide where rules are read from, where the filter file goes,
//! and how strict parsing and output are.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`), which is
//!    where CLI flags land
//! 2. Environment variables (`RSRULES_*`)
//! 3. Project config (`rsrules.yaml`, nearest at or above the working dir)
//! 4. User config (`~/.rsrules/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use rsrules::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/backup"))
//!     .build()
//!     .unwrap()
//!     .resolved();
//!
//! println!("{} -> {}", config.input.display(), config.output.display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, ResolvedConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use validator::ConfigValidator;
