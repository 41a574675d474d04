//! Compile a rule file into an rsync filter file.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use rsrules::fs::LocalFilesystem;
use rsrules::operations::{compile_rules, CompileOptions};
use rsrules::Config;

use crate::error::CliError;
use crate::utils::{flag, load_configuration, progress, GlobalOptions};

/// Compile a rule file into an rsync filter file.
#[derive(Args)]
pub struct CompileCommand {
    /// Rule file to read [default: input_rules.rsync]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Filter file to write [default: pattern_rules.rsync]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also print every filter line to stdout
    #[arg(long)]
    pub echo: bool,

    /// Fail on rule lines without a recognized marker
    #[arg(long)]
    pub strict: bool,

    /// Write the filter file in place instead of via a temporary file
    #[arg(long)]
    pub no_atomic: bool,
}

impl CompileCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        let config = load_configuration(Config {
            input: self.input,
            output: self.output,
            echo: flag(self.echo),
            strict: flag(self.strict),
            atomic: self.no_atomic.then_some(false),
        })?;
        let options = CompileOptions::from(&config);

        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        let echo: Option<&mut dyn Write> = if config.echo {
            Some(&mut stdout)
        } else {
            None
        };

        let report = compile_rules(&options, LocalFilesystem, echo, |event| {
            progress(&logger, &event.to_string());
        })?;

        if !report.unrecognized.is_empty() {
            logger.info(&format!(
                "{} unrecognized rule line(s) in {} were ignored",
                report.unrecognized.len(),
                report.input.display()
            ));
        }
        logger.info(&format!(
            "{} included, {} excluded, {} removed by partial exclude",
            report.stats.included, report.stats.excluded, report.stats.removed_by_partial
        ));
        progress(
            &logger,
            &format!(
                "Wrote {} filter lines to {}",
                report.lines_written,
                report.output.display()
            ),
        );

        Ok(())
    }
}
