//! High-level operations built from the parser, compiler and writer.
//!
//! These are the entry points the command-line front end calls. Each takes
//! plain options and returns a serializable report.
//!
//! # Examples
//!
//! ```no_run
//! use rsrules::config::ConfigBuilder;
//! use rsrules::fs::LocalFilesystem;
//! use rsrules::operations::{compile_rules, CompileOptions};
//!
//! let config = ConfigBuilder::new().build().unwrap().resolved();
//! let options = CompileOptions::from(&config);
//!
//! let report = compile_rules(&options, LocalFilesystem, None, |event| eprintln!("{event}")).unwrap();
//! println!("{} lines written", report.lines_written);
//! ```

pub mod check;
pub mod compile;

pub use check::{check_rules, CheckReport};
pub use compile::{compile_rules, CompileEvent, CompileOptions, CompileReport};
