//! Command definitions for the `rsrules` binary, exposed as a library so
//! tests can inspect the clap command tree directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
