//! Subtree expansion.
//!
//! A rule naming a directory stands for everything beneath it. rsync needs
//! each of those directories spelled out, so a directory rule expands into a
//! `<dir>/` and `<dir>/*` pair for the directory itself and for every
//! directory below it. Files are covered by the `/*` of their parent.

use crate::entry::FilterEntry;
use crate::fs::{DirectoryLister, NodeKind};
use crate::path::CanonicalPath;

/// Expands canonical paths into filter entries using a [`DirectoryLister`].
///
/// # Examples
///
/// ```
/// use rsrules::expand::SubdirectoryExpander;
/// use rsrules::fs::MemoryFilesystem;
/// use rsrules::path::normalize;
///
/// let fs = MemoryFilesystem::new().with_dir("/data/photos").with_file("/data/a.txt");
/// let expander = SubdirectoryExpander::new(&fs);
///
/// let mut entries: Vec<String> = expander
///     .expand(&normalize("/data/").unwrap())
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// entries.sort();
/// assert_eq!(entries, vec!["/data/", "/data/*", "/data/photos/", "/data/photos/*"]);
/// ```
pub struct SubdirectoryExpander<L> {
    lister: L,
}

impl<L: DirectoryLister> SubdirectoryExpander<L> {
    /// Create an expander over the given lister.
    pub fn new(lister: L) -> Self {
        Self { lister }
    }

    /// Expand a path into its filter entries.
    ///
    /// A path without a trailing `/` is a single file and yields exactly one
    /// plain entry, whether or not it exists. A directory path yields a plain
    /// and a wildcard entry for itself and every directory beneath it.
    ///
    /// Missing or empty directories yield nothing. Subdirectories that cannot
    /// be read are skipped with a warning. Symbolic links below the root are
    /// never followed, so the walk always terminates.
    ///
    /// The order of the returned entries is unspecified.
    pub fn expand(&self, path: &CanonicalPath) -> Vec<FilterEntry> {
        if !path.is_directory() {
            return vec![FilterEntry::plain(path.as_str())];
        }

        let root = path.as_str();
        if !self.lister.is_directory(root) {
            log::debug!("Skipping expansion of missing directory {root}");
            return Vec::new();
        }

        let root_children = match self.lister.list_children(root) {
            Ok(children) => children,
            Err(e) => {
                log::warn!("Cannot read directory {root}: {e}");
                return Vec::new();
            }
        };
        if root_children.is_empty() {
            log::debug!("Directory {root} is empty");
            return Vec::new();
        }

        let mut entries = Vec::new();
        let mut pending = vec![(FilterEntry::directory(root), root_children)];

        while let Some((dir, children)) = pending.pop() {
            for child in children.iter().filter(|c| c.kind == NodeKind::Directory) {
                let child_dir = format!("{dir}{}/", child.name);
                match self.lister.list_children(&child_dir) {
                    Ok(grandchildren) => {
                        pending.push((FilterEntry::plain(child_dir), grandchildren));
                    }
                    Err(e) => log::warn!("Cannot read directory {child_dir}: {e}"),
                }
            }

            for child in children.iter().filter(|c| c.kind == NodeKind::Symlink) {
                log::debug!("Not following symlink {dir}{}", child.name);
            }

            entries.push(FilterEntry::wildcard(dir.as_str()));
            entries.push(dir);
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFilesystem;

    fn expand_sorted(fs: &MemoryFilesystem, path: &str) -> Vec<String> {
        let path = CanonicalPath::new(path).unwrap();
        let mut entries: Vec<String> = SubdirectoryExpander::new(fs)
            .expand(&path)
            .iter()
            .map(ToString::to_string)
            .collect();
        entries.sort();
        entries
    }

    fn sample_fs() -> MemoryFilesystem {
        MemoryFilesystem::new()
            .with_dir("/mnt/c/data/tmp/nested")
            .with_dir("/mnt/c/data/cache")
            .with_file("/mnt/c/data/a.txt")
            .with_file("/mnt/c/data/tmp/b.txt")
    }

    #[test]
    fn test_file_path_single_entry() {
        let fs = sample_fs();
        assert_eq!(expand_sorted(&fs, "/mnt/c/data/a.txt"), vec!["/mnt/c/data/a.txt"]);
    }

    #[test]
    fn test_missing_file_still_single_entry() {
        let fs = MemoryFilesystem::new();
        assert_eq!(expand_sorted(&fs, "/nowhere/file"), vec!["/nowhere/file"]);
    }

    #[test]
    fn test_directory_expands_full_subtree() {
        let fs = sample_fs();
        assert_eq!(
            expand_sorted(&fs, "/mnt/c/data/"),
            vec![
                "/mnt/c/data/",
                "/mnt/c/data/*",
                "/mnt/c/data/cache/",
                "/mnt/c/data/cache/*",
                "/mnt/c/data/tmp/",
                "/mnt/c/data/tmp/*",
                "/mnt/c/data/tmp/nested/",
                "/mnt/c/data/tmp/nested/*",
            ]
        );
    }

    #[test]
    fn test_nested_empty_directory_is_emitted() {
        let fs = sample_fs();
        let entries = expand_sorted(&fs, "/mnt/c/data/tmp/");
        assert!(entries.contains(&"/mnt/c/data/tmp/nested/".to_string()));
        assert!(entries.contains(&"/mnt/c/data/tmp/nested/*".to_string()));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let fs = sample_fs();
        assert!(expand_sorted(&fs, "/mnt/c/missing/").is_empty());
    }

    #[test]
    fn test_empty_root_directory_is_empty() {
        let fs = MemoryFilesystem::new().with_dir("/mnt/c/empty");
        assert!(expand_sorted(&fs, "/mnt/c/empty/").is_empty());
    }

    #[test]
    fn test_file_with_trailing_slash_is_empty() {
        let fs = sample_fs();
        assert!(expand_sorted(&fs, "/mnt/c/data/a.txt/").is_empty());
    }

    #[test]
    fn test_symlinks_not_followed() {
        let fs = MemoryFilesystem::new()
            .with_dir("/home/user/docs")
            .with_symlink("/home/user/loop");

        assert_eq!(
            expand_sorted(&fs, "/home/user/"),
            vec![
                "/home/user/",
                "/home/user/*",
                "/home/user/docs/",
                "/home/user/docs/*",
            ]
        );
    }

    #[test]
    fn test_repeated_trailing_slashes_collapse() {
        let fs = sample_fs().with_file("/mnt/c/data/cache/blob");
        let entries = expand_sorted(&fs, "/mnt/c/data/cache//");
        assert_eq!(entries, vec!["/mnt/c/data/cache/", "/mnt/c/data/cache/*"]);
    }
}
