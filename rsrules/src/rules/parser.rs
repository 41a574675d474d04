//! Rule file parsing.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::normalize::{normalize, partial_pattern};
use crate::rules::{RuleKind, RuleSet, UnrecognizedLine};

const INCLUDE_MARKER: &str = "+ ";
const EXCLUDE_MARKER: &str = "- ";
const PARTIAL_EXCLUDE_MARKER: &str = "* ";
const COMMENT_MARKER: char = '#';

/// How the parser treats lines without a recognized marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip such lines, recording them on the [`RuleSet`] and logging a
    /// warning. Compatible with rule files written for older tools.
    #[default]
    Lenient,
    /// Reject the first such line with [`Error::UnrecognizedRule`].
    Strict,
}

/// Outcome of classifying one line.
enum Line {
    Skip,
    Rule(RuleKind),
    Unrecognized,
}

/// Parses rule-specification lines into a [`RuleSet`].
///
/// # Examples
///
/// ```
/// use rsrules::rules::{ParseMode, RuleParser};
///
/// let lines = ["+ /home/user/", "oops", "- /home/user/tmp/"];
///
/// let rules = RuleParser::new().parse(lines).unwrap();
/// assert_eq!(rules.unrecognized().len(), 1);
///
/// let strict = RuleParser::with_mode(ParseMode::Strict);
/// assert!(strict.parse(lines).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleParser {
    mode: ParseMode,
}

impl RuleParser {
    /// Create a lenient parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given mode.
    #[must_use]
    pub fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Returns the parse mode.
    #[must_use]
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse an ordered sequence of rule lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if a marker is followed by an empty
    /// path, and [`Error::UnrecognizedRule`] in strict mode for a line with
    /// no recognized marker.
    pub fn parse<I, S>(&self, lines: I) -> Result<RuleSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = RuleSet::default();

        for (index, raw) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let line = raw.as_ref().trim_end();

            match Self::classify(line)? {
                Line::Skip => {}
                Line::Rule(rule) => rules.push(rule),
                Line::Unrecognized => {
                    if self.mode == ParseMode::Strict {
                        return Err(Error::UnrecognizedRule {
                            line: line_number,
                            content: line.to_string(),
                        });
                    }
                    log::warn!("Ignoring unrecognized rule on line {line_number}: {line}");
                    rules.push_unrecognized(UnrecognizedLine {
                        line_number,
                        content: line.to_string(),
                    });
                }
            }
        }

        log::debug!(
            "Parsed {} include, {} exclude and {} partial exclude rules",
            rules.includes().len(),
            rules.excludes().len(),
            rules.partial_excludes().len()
        );
        Ok(rules)
    }

    /// Parse rules from an in-memory string.
    ///
    /// # Errors
    ///
    /// See [`RuleParser::parse`].
    pub fn parse_str(&self, text: &str) -> Result<RuleSet> {
        self.parse(text.lines())
    }

    /// Read and parse a rule file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RuleFileNotFound`] if the file cannot be opened or
    /// read, otherwise see [`RuleParser::parse`].
    pub fn parse_file(&self, path: &Path) -> Result<RuleSet> {
        let contents = fs::read_to_string(path).map_err(|source| Error::RuleFileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&contents)
    }

    fn classify(line: &str) -> Result<Line> {
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return Ok(Line::Skip);
        }

        if let Some(rest) = line.strip_prefix(PARTIAL_EXCLUDE_MARKER) {
            return Ok(Line::Rule(RuleKind::PartialExclude(partial_pattern(rest))));
        }
        if let Some(rest) = line.strip_prefix(INCLUDE_MARKER) {
            return Ok(Line::Rule(RuleKind::Include(normalize(rest)?)));
        }
        if let Some(rest) = line.strip_prefix(EXCLUDE_MARKER) {
            return Ok(Line::Rule(RuleKind::Exclude(normalize(rest)?)));
        }

        // A marker with nothing after it has lost its trailing space to trimming
        if matches!(line, "+" | "-" | "*") {
            return Err(Error::InvalidPath {
                path: String::new(),
                reason: format!("'{line}' rule has no path"),
            });
        }

        Ok(Line::Unrecognized)
    }
}
