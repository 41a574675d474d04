//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, CompileCommand, CompletionsCommand, NormalizeCommand};
use clap::{Parser, Subcommand};

/// Compile include/exclude path rules into rsync filter files.
#[derive(Parser)]
#[command(name = "rsrules")]
#[command(
    version,
    about = "Compile include/exclude path rules into rsync filter files",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Compile a rule file into an rsync filter file
    Compile(CompileCommand),

    /// Report what a rule file contains without compiling it
    Check(CheckCommand),

    /// Print the canonical form of path tokens
    Normalize(NormalizeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
