//! Filter entries and the compiled filter list.
//!
//! A [`FilterEntry`] is one `+ ` line of the eventual filter file. Directory
//! entries always end in `/`; the wildcard entry for a directory appends `*`
//! so that it matches the directory's immediate children.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Whether a filter entry names a path or the children of a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    /// A file path, or a directory path ending in `/`.
    Plain,
    /// A directory path followed by `*`.
    Wildcard,
}

/// One line of the compiled filter list.
///
/// Equality, hashing and ordering use the rendered text alone, so a plain
/// entry written as `/a/*` and the wildcard entry for `/a/` are the same
/// line. `/a/` sorts before `/a/*` which sorts before `/a/b/`.
///
/// # Examples
///
/// ```
/// use rsrules::{EntryKind, FilterEntry};
///
/// let dir = FilterEntry::directory("/mnt/c/data");
/// assert_eq!(dir.as_str(), "/mnt/c/data/");
///
/// let children = FilterEntry::wildcard("/mnt/c/data/");
/// assert_eq!(children.as_str(), "/mnt/c/data/*");
/// assert_eq!(children.kind(), EntryKind::Wildcard);
///
/// assert!(dir < children);
/// ```
#[derive(Debug, Clone)]
pub struct FilterEntry {
    text: String,
    kind: EntryKind,
}

impl FilterEntry {
    /// A plain entry whose text is taken verbatim.
    #[must_use]
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            text: path.into(),
            kind: EntryKind::Plain,
        }
    }

    /// A plain entry for a directory, ending in exactly one `/`.
    #[must_use]
    pub fn directory(dir: &str) -> Self {
        Self::plain(with_single_trailing_slash(dir))
    }

    /// A wildcard entry `<dir>/*` covering the immediate children of `dir`.
    #[must_use]
    pub fn wildcard(dir: &str) -> Self {
        let mut text = with_single_trailing_slash(dir);
        text.push('*');
        Self {
            text,
            kind: EntryKind::Wildcard,
        }
    }

    /// Returns the rendered path text of the entry.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the entry kind.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns true for `<dir>/*` entries.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.kind == EntryKind::Wildcard
    }
}

impl fmt::Display for FilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for FilterEntry {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for FilterEntry {}

impl Hash for FilterEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for FilterEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilterEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

fn with_single_trailing_slash(dir: &str) -> String {
    let mut text = dir.trim_end_matches('/').to_string();
    text.push('/');
    text
}

/// The final, deduplicated and sorted list of filter entries.
///
/// Built once per compilation, written once, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledFilterList {
    entries: Vec<FilterEntry>,
}

impl CompiledFilterList {
    /// Returns the entries in output order.
    #[must_use]
    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Returns the number of entries, excluding the terminal catch-all line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterEntry> {
        self.entries.iter()
    }

    /// Returns true if an entry with exactly this text is present.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .binary_search_by(|entry| entry.as_str().cmp(text))
            .is_ok()
    }
}

impl From<BTreeSet<FilterEntry>> for CompiledFilterList {
    fn from(set: BTreeSet<FilterEntry>) -> Self {
        Self {
            entries: set.into_iter().collect(),
        }
    }
}

impl FromIterator<FilterEntry> for CompiledFilterList {
    fn from_iter<I: IntoIterator<Item = FilterEntry>>(iter: I) -> Self {
        iter.into_iter().collect::<BTreeSet<_>>().into()
    }
}

impl<'a> IntoIterator for &'a CompiledFilterList {
    type Item = &'a FilterEntry;
    type IntoIter = std::slice::Iter<'a, FilterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
