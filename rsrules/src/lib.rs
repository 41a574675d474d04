#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rsrules
//!
//! A compiler for rsync include-from filter files.
//!
//! rsync's include/exclude rules are order sensitive and do not descend into
//! a directory unless every ancestor of it is included too. This library
//! takes a short, human-written rule file and compiles it into the explicit,
//! sorted allow-list that rsync needs.
//!
//! ## Rule File
//!
//! ```text
//! # back up the data drive, minus scratch space and caches
//! + C:\data\
//! - C:\data\tmp\
//! * /cache/
//! ```
//!
//! ## Core Types
//!
//! - [`RuleParser`] and [`RuleSet`]: classify rule lines into typed rules
//! - [`RuleCompiler`]: expand, subtract and sort into a [`CompiledFilterList`]
//! - [`FilterWriter`]: write the `+ <entry>` lines and the closing `- *`
//! - [`compile_rules`]: the whole pipeline from rule file to filter file
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: console logging
//!
//! ## Examples
//!
//! ```
//! use rsrules::fs::MemoryFilesystem;
//! use rsrules::{RuleCompiler, RuleParser};
//!
//! let fs = MemoryFilesystem::new()
//!     .with_dir("/mnt/c/data/docs")
//!     .with_file("/mnt/c/data/tmp/scratch.log")
//!     .with_file("/mnt/c/data/docs/report.pdf");
//!
//! let rules = RuleParser::new()
//!     .parse(["+ C:\\data\\", "- C:\\data\\tmp\\"])
//!     .unwrap();
//! let list = RuleCompiler::new(&fs).compile(rules);
//!
//! let lines: Vec<String> = list.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     lines,
//!     vec![
//!         "/mnt/",
//!         "/mnt/c/",
//!         "/mnt/c/data/",
//!         "/mnt/c/data/*",
//!         "/mnt/c/data/docs/",
//!         "/mnt/c/data/docs/*",
//!     ]
//! );
//! ```

pub mod compiler;
pub mod config;
pub mod entry;
pub mod error;
pub mod expand;
pub mod fs;
pub mod logging;
pub mod operations;
pub mod path;
pub mod rules;
pub mod writer;

// Re-export key types at crate root for convenience
pub use compiler::{CompileStage, CompileStats, RuleCompiler};
pub use config::{Config, ConfigBuilder, ResolvedConfig};
pub use entry::{CompiledFilterList, EntryKind, FilterEntry};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    check_rules, compile_rules, CheckReport, CompileEvent, CompileOptions, CompileReport,
};
pub use path::CanonicalPath;
pub use rules::{ParseMode, RuleKind, RuleParser, RuleSet};
pub use writer::FilterWriter;
