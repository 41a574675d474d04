//! Print the canonical form of path tokens.

use clap::Args;
use rsrules::path::normalize::{normalize, partial_pattern};
use serde::Serialize;

use crate::commands::ReportFormat;
use crate::error::CliError;
use crate::utils::GlobalOptions;

/// One token and the form it takes in a filter file.
#[derive(Debug, Serialize)]
struct NormalizedToken<'a> {
    token: &'a str,
    canonical: String,
}

/// Print the canonical form of each path token, one per line.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path tokens as they would appear after a rule marker
    #[arg(value_name = "TOKEN", required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Show the partial exclude pattern form instead
    #[arg(long)]
    pub partial: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let rows = self
            .tokens
            .iter()
            .map(|token| {
                let canonical = if self.partial {
                    Ok(partial_pattern(token))
                } else {
                    normalize(token).map(rsrules::CanonicalPath::into_string)
                };
                canonical
                    .map(|canonical| NormalizedToken { token, canonical })
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match self.format {
            ReportFormat::Text => {
                for row in &rows {
                    println!("{}", row.canonical);
                }
            }
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
