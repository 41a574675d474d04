//! Inspect a rule file without compiling it.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use rsrules::operations::{check_rules, CheckReport};
use rsrules::Config;

use crate::error::CliError;
use crate::utils::{flag, load_configuration, GlobalOptions};

/// Output format for `check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Report the rules in a rule file and any lines that are not rules.
#[derive(Args)]
pub struct CheckCommand {
    /// Rule file to read [default: input_rules.rsync]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Exit with status 1 if any line is unrecognized
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl CheckCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(Config {
            input: self.input,
            strict: flag(self.strict),
            ..Default::default()
        })?;

        let report = check_rules(&config.input)?;

        match self.format {
            ReportFormat::Text => print!("{}", render_text(&report)),
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                println!("{json}");
            }
        }

        if config.strict && !report.is_clean() {
            return Err(CliError::SemanticFailure(format!(
                "{} unrecognized rule line(s) in {}",
                report.unrecognized.len(),
                report.input.display()
            )));
        }

        Ok(())
    }
}

fn render_text(report: &CheckReport) -> String {
    let mut text = format!(
        "{}: {} include, {} exclude, {} partial exclude\n",
        report.input.display(),
        report.rules.include,
        report.rules.exclude,
        report.rules.partial_exclude
    );
    for line in &report.unrecognized {
        text.push_str(&format!(
            "line {}: unrecognized rule '{}'\n",
            line.line_number, line.content
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsrules::rules::{RuleCounts, UnrecognizedLine};

    #[test]
    fn test_render_text() {
        let report = CheckReport {
            input: PathBuf::from("input_rules.rsync"),
            rules: RuleCounts {
                include: 2,
                exclude: 1,
                partial_exclude: 0,
            },
            unrecognized: vec![UnrecognizedLine {
                line_number: 4,
                content: "/old/style".into(),
            }],
        };

        assert_eq!(
            render_text(&report),
            "input_rules.rsync: 2 include, 1 exclude, 0 partial exclude\n\
             line 4: unrecognized rule '/old/style'\n"
        );
    }
}
