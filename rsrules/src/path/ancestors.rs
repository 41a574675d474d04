//! Ancestor directory chains.
//!
//! rsync evaluates filter rules one directory level at a time and never
//! descends into a directory that no rule includes. A nested include such as
//! `/mnt/c/Users/foo/bar.txt` is therefore only reachable if every directory
//! above it is listed explicitly.

use crate::entry::FilterEntry;
use crate::path::CanonicalPath;

/// Build the chain of ancestor directory entries for a path, deepest first.
///
/// The leaf segment is dropped and every remaining prefix becomes one
/// directory entry, down to (but not including) the root `/`. For a
/// directory path the leaf is the empty segment after the trailing `/`, so
/// the directory itself heads the chain.
///
/// Only the path text is inspected; the filesystem is never touched.
///
/// # Examples
///
/// ```
/// use rsrules::path::{ancestors, normalize};
///
/// let path = normalize("/mnt/c/Users/foo/bar.txt").unwrap();
/// let chain: Vec<String> = ancestors(&path).iter().map(ToString::to_string).collect();
/// assert_eq!(chain, vec!["/mnt/c/Users/foo/", "/mnt/c/Users/", "/mnt/c/", "/mnt/"]);
/// ```
#[must_use]
pub fn ancestors(path: &CanonicalPath) -> Vec<FilterEntry> {
    let mut segments: Vec<&str> = path.as_str().split('/').collect();
    segments.pop();

    let mut chain = Vec::with_capacity(segments.len().saturating_sub(1));
    while segments.len() > 1 {
        let mut dir = segments.join("/");
        dir.push('/');
        chain.push(FilterEntry::plain(dir));
        segments.pop();
    }
    chain
}
