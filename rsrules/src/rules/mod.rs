//! Typed rules and rule sets.
//!
//! A rule file is classified line by line into [`RuleKind`] values exactly
//! once, at parse time. Everything downstream works on the typed rules and
//! never looks at the line markers again.
//!
//! # Rule File Format
//!
//! | Prefix    | Meaning         |
//! |-----------|-----------------|
//! | `#`       | comment         |
//! | *(blank)* | ignored         |
//! | `+ `      | include path    |
//! | `- `      | exclude path    |
//! | `* `      | partial exclude |
//!
//! # Examples
//!
//! ```
//! use rsrules::rules::RuleParser;
//!
//! let rules = RuleParser::new()
//!     .parse_str("# backup\n+ C:\\data\\\n- C:\\data\\tmp\\\n* cache\n")
//!     .unwrap();
//!
//! assert_eq!(rules.includes()[0].as_str(), "/mnt/c/data/");
//! assert_eq!(rules.excludes()[0].as_str(), "/mnt/c/data/tmp/");
//! assert_eq!(rules.partial_excludes(), ["/cache/"]);
//! ```

mod parser;

pub use parser::{ParseMode, RuleParser};

use serde::Serialize;

use crate::path::CanonicalPath;

/// A single classified rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Include the path, its subtree and its ancestors.
    Include(CanonicalPath),
    /// Exclude the path and its subtree.
    Exclude(CanonicalPath),
    /// Drop every entry whose text contains this `/fragment/` pattern.
    PartialExclude(String),
}

/// A non-blank, non-comment line that carried no recognized marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedLine {
    /// One-based line number.
    pub line_number: usize,
    /// The line with trailing whitespace removed.
    pub content: String,
}

/// Per-category rule counts, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuleCounts {
    /// Number of include rules.
    pub include: usize,
    /// Number of exclude rules.
    pub exclude: usize,
    /// Number of partial exclude patterns.
    pub partial_exclude: usize,
}

/// The parsed contents of a rule file.
///
/// Immutable once built; consumed by
/// [`RuleCompiler::compile`](crate::compiler::RuleCompiler::compile).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    includes: Vec<CanonicalPath>,
    excludes: Vec<CanonicalPath>,
    partial_excludes: Vec<String>,
    unrecognized: Vec<UnrecognizedLine>,
}

impl RuleSet {
    /// Build a rule set from classified rules, preserving declaration order
    /// within each category.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsrules::path::normalize;
    /// use rsrules::rules::{RuleKind, RuleSet};
    ///
    /// let rules = RuleSet::from_rules([
    ///     RuleKind::Include(normalize("/home/user/").unwrap()),
    ///     RuleKind::PartialExclude("/.cache/".to_string()),
    /// ]);
    /// assert_eq!(rules.counts().include, 1);
    /// assert_eq!(rules.counts().partial_exclude, 1);
    /// ```
    pub fn from_rules(rules: impl IntoIterator<Item = RuleKind>) -> Self {
        let mut set = Self::default();
        for rule in rules {
            set.push(rule);
        }
        set
    }

    pub(crate) fn push(&mut self, rule: RuleKind) {
        match rule {
            RuleKind::Include(path) => self.includes.push(path),
            RuleKind::Exclude(path) => self.excludes.push(path),
            RuleKind::PartialExclude(pattern) => self.partial_excludes.push(pattern),
        }
    }

    pub(crate) fn push_unrecognized(&mut self, line: UnrecognizedLine) {
        self.unrecognized.push(line);
    }

    /// Include paths in declaration order.
    #[must_use]
    pub fn includes(&self) -> &[CanonicalPath] {
        &self.includes
    }

    /// Exclude paths in declaration order.
    #[must_use]
    pub fn excludes(&self) -> &[CanonicalPath] {
        &self.excludes
    }

    /// Partial exclude patterns in declaration order.
    #[must_use]
    pub fn partial_excludes(&self) -> &[String] {
        &self.partial_excludes
    }

    /// Lines that were skipped because they carried no recognized marker.
    #[must_use]
    pub fn unrecognized(&self) -> &[UnrecognizedLine] {
        &self.unrecognized
    }

    /// Number of rules in each category.
    #[must_use]
    pub fn counts(&self) -> RuleCounts {
        RuleCounts {
            include: self.includes.len(),
            exclude: self.excludes.len(),
            partial_exclude: self.partial_excludes.len(),
        }
    }

    /// Returns true if the set holds no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty() && self.partial_excludes.is_empty()
    }

    /// Split the set into its include, exclude and partial exclude lists.
    #[must_use]
    pub fn into_parts(self) -> (Vec<CanonicalPath>, Vec<CanonicalPath>, Vec<String>) {
        (self.includes, self.excludes, self.partial_excludes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::normalize;

    #[test]
    fn test_from_rules_splits_categories() {
        let rules = RuleSet::from_rules([
            RuleKind::Include(normalize("/a/").unwrap()),
            RuleKind::Exclude(normalize("/a/b/").unwrap()),
            RuleKind::Include(normalize("/c").unwrap()),
            RuleKind::PartialExclude("/tmp/".to_string()),
        ]);

        let includes: Vec<_> = rules.includes().iter().map(CanonicalPath::as_str).collect();
        assert_eq!(includes, vec!["/a/", "/c"]);
        assert_eq!(rules.excludes().len(), 1);
        assert_eq!(rules.partial_excludes(), ["/tmp/"]);
        assert!(rules.unrecognized().is_empty());
    }

    #[test]
    fn test_counts() {
        let rules = RuleSet::from_rules([
            RuleKind::Include(normalize("/a/").unwrap()),
            RuleKind::Include(normalize("/b/").unwrap()),
            RuleKind::Exclude(normalize("/a/x/").unwrap()),
        ]);
        assert_eq!(
            rules.counts(),
            RuleCounts {
                include: 2,
                exclude: 1,
                partial_exclude: 0,
            }
        );
    }

    #[test]
    fn test_empty_set() {
        let rules = RuleSet::default();
        assert!(rules.is_empty());
        let (inc, exc, partial) = rules.into_parts();
        assert!(inc.is_empty() && exc.is_empty() && partial.is_empty());
    }
}
