//! Parse-only inspection of a rule file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::rules::{ParseMode, RuleCounts, RuleParser, UnrecognizedLine};

/// Result of checking a rule file without compiling it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The rule file that was read.
    pub input: PathBuf,
    /// Rules parsed per category.
    pub rules: RuleCounts,
    /// Lines without a recognized marker.
    pub unrecognized: Vec<UnrecognizedLine>,
}

impl CheckReport {
    /// Returns true if every non-blank, non-comment line was a rule.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unrecognized.is_empty()
    }
}

/// Parse `input` leniently and report what it contains.
///
/// Unrecognized lines never fail the check; they are listed in the report
/// so a caller can decide what to do with them.
///
/// # Errors
///
/// Returns [`Error::RuleFileNotFound`](crate::Error::RuleFileNotFound) if
/// the file cannot be read and
/// [`Error::InvalidPath`](crate::Error::InvalidPath) if a rule has an empty
/// path.
pub fn check_rules(input: &Path) -> Result<CheckReport> {
    let rules = RuleParser::with_mode(ParseMode::Lenient).parse_file(input)?;
    Ok(CheckReport {
        input: input.to_path_buf(),
        rules: rules.counts(),
        unrecognized: rules.unrecognized().to_vec(),
    })
}
