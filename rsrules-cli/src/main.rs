//! Main entry point for the rsrules CLI.
//!
//! - `compile`: Compile a rule file into an rsync filter file
//! - `check`: Report what a rule file contains without compiling it
//! - `normalize`: Print the canonical form of path tokens
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Route library log records through the same console logger
    let logger = global.logger();
    if let Err(e) = logger.install() {
        logger.debug(&format!("Library diagnostics stay on the existing logger: {e}"));
    }

    let result = match cli.command {
        cli::Command::Compile(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
