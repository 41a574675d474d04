//! Build script for rsrules-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .help("Rule file to read [default: input_rules.rsync]")
        .value_name("PATH")
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("rsrules")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile include/exclude path rules into rsync filter files")
        .long_about(
            "Expand a short include/exclude rule file into the explicit, sorted \
             allow-list of directory patterns that rsync --include-from needs",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("compile")
                .about("Compile a rule file into an rsync filter file")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Filter file to write [default: pattern_rules.rsync]")
                        .value_name("PATH"),
                )
                .arg(
                    Arg::new("echo")
                        .long("echo")
                        .help("Also print every filter line to stdout")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail on rule lines without a recognized marker")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-atomic")
                        .long("no-atomic")
                        .help("Write the filter file in place instead of via a temporary file")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("check")
                .about("Report what a rule file contains without compiling it")
                .arg(input_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Exit with status 1 if any line is unrecognized")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
            Command::new("normalize")
                .about("Print the canonical form of path tokens")
                .arg(
                    Arg::new("tokens")
                        .value_name("TOKEN")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("partial")
                        .long("partial")
                        .help("Show the partial exclude pattern form instead")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("rsrules.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
