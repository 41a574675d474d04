//! Rule compilation.
//!
//! The compiler turns a [`RuleSet`] into the final [`CompiledFilterList`]:
//!
//! 1. Every include path contributes its expanded subtree and its ancestor
//!    chain.
//! 2. Every exclude path contributes its expanded subtree only, so excluding
//!    a directory never removes the parents it shares with an include.
//! 3. Excluded entries are subtracted from included entries by exact match.
//! 4. Entries containing any partial exclude pattern are dropped.
//! 5. The survivors are deduplicated and sorted by their text.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;

use crate::entry::{CompiledFilterList, FilterEntry};
use crate::expand::SubdirectoryExpander;
use crate::fs::{DirectoryLister, LocalFilesystem};
use crate::path::ancestors;
use crate::rules::RuleSet;

/// A stage of a compile run, reported to progress observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStage {
    /// Expanding include rules.
    FindingIncludes,
    /// Expanding exclude rules.
    FindingExcludes,
    /// Subtracting exclusions and partial exclusions.
    GeneratingRules,
}

impl fmt::Display for CompileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindingIncludes => write!(f, "Finding all paths to include..."),
            Self::FindingExcludes => write!(f, "Finding all paths to exclude..."),
            Self::GeneratingRules => write!(f, "Generating pattern rules..."),
        }
    }
}

/// Entry counts collected while compiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompileStats {
    /// Distinct entries produced by include rules.
    pub included: usize,
    /// Distinct entries produced by exclude rules.
    pub excluded: usize,
    /// Included entries removed by an exact exclude match.
    pub removed_by_exclude: usize,
    /// Entries removed by partial exclude patterns.
    pub removed_by_partial: usize,
    /// Entries in the final list.
    pub emitted: usize,
}

/// Compiles rule sets into filter lists.
///
/// # Examples
///
/// ```
/// use rsrules::compiler::RuleCompiler;
/// use rsrules::fs::MemoryFilesystem;
/// use rsrules::rules::RuleParser;
///
/// let fs = MemoryFilesystem::new()
///     .with_dir("/mnt/c/data/tmp/scratch")
///     .with_dir("/mnt/c/data/cache")
///     .with_file("/mnt/c/data/a.txt");
///
/// let rules = RuleParser::new()
///     .parse(["+ C:\\data\\", "- C:\\data\\tmp\\", "* /cache/"])
///     .unwrap();
///
/// let list = RuleCompiler::new(&fs).compile(rules);
/// let lines: Vec<String> = list.iter().map(ToString::to_string).collect();
/// assert_eq!(lines, vec!["/mnt/", "/mnt/c/", "/mnt/c/data/", "/mnt/c/data/*"]);
/// ```
pub struct RuleCompiler<L> {
    expander: SubdirectoryExpander<L>,
}

impl RuleCompiler<LocalFilesystem> {
    /// Create a compiler that walks the local filesystem.
    #[must_use]
    pub fn local() -> Self {
        Self::new(LocalFilesystem)
    }
}

impl<L: DirectoryLister> RuleCompiler<L> {
    /// Create a compiler over the given lister.
    pub fn new(lister: L) -> Self {
        Self {
            expander: SubdirectoryExpander::new(lister),
        }
    }

    /// Compile a rule set into a sorted, deduplicated filter list.
    pub fn compile(&self, rules: RuleSet) -> CompiledFilterList {
        self.compile_observed(rules, |_| {}).0
    }

    /// Compile a rule set, reporting each stage to `observer` and returning
    /// entry counts alongside the list.
    pub fn compile_observed<F>(
        &self,
        rules: RuleSet,
        mut observer: F,
    ) -> (CompiledFilterList, CompileStats)
    where
        F: FnMut(CompileStage),
    {
        let (includes, excludes, partial_excludes) = rules.into_parts();
        let mut stats = CompileStats::default();

        observer(CompileStage::FindingIncludes);
        let mut included = BTreeSet::new();
        for path in &includes {
            included.extend(self.expander.expand(path));
            included.extend(ancestors(path));
        }
        stats.included = included.len();
        log::debug!("{} include rules produced {} entries", includes.len(), included.len());

        observer(CompileStage::FindingExcludes);
        let mut excluded = HashSet::new();
        for path in &excludes {
            excluded.extend(self.expander.expand(path));
        }
        stats.excluded = excluded.len();
        log::debug!("{} exclude rules produced {} entries", excludes.len(), excluded.len());

        observer(CompileStage::GeneratingRules);
        included.retain(|entry: &FilterEntry| !excluded.contains(entry));
        stats.removed_by_exclude = stats.included - included.len();

        let before_partial = included.len();
        for pattern in &partial_excludes {
            included.retain(|entry| !entry.as_str().contains(pattern.as_str()));
        }
        stats.removed_by_partial = before_partial - included.len();
        stats.emitted = included.len();

        log::debug!(
            "Removed {} entries by exclusion and {} by partial exclusion, {} remain",
            stats.removed_by_exclude,
            stats.removed_by_partial,
            stats.emitted
        );

        (CompiledFilterList::from(included), stats)
    }
}
