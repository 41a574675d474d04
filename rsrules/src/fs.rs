//! Directory enumeration for subtree expansion.
//!
//! Expansion only needs to ask two questions of a filesystem: is this path a
//! directory, and what are its immediate children. The [`DirectoryLister`]
//! trait captures exactly that, so the real disk ([`LocalFilesystem`]) and an
//! in-memory tree ([`MemoryFilesystem`]) are interchangeable.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Kind of a node returned by a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A directory that expansion descends into.
    Directory,
    /// A regular file (or anything that is not a directory or symlink).
    File,
    /// A symbolic link. Never followed below the expansion root.
    Symlink,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// The child's file name, without any separators.
    pub name: String,
    /// What the child is, without following symlinks.
    pub kind: NodeKind,
}

impl DirEntry {
    /// Create a new directory entry.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Trait for enumerating directories.
///
/// # Examples
///
/// ```
/// use rsrules::fs::{DirectoryLister, MemoryFilesystem, NodeKind};
///
/// let fs = MemoryFilesystem::new()
///     .with_dir("/mnt/c/data/tmp")
///     .with_file("/mnt/c/data/a.txt");
///
/// assert!(fs.is_directory("/mnt/c/data/"));
/// let children = fs.list_children("/mnt/c/data/").unwrap();
/// assert_eq!(children.len(), 2);
/// assert!(children.iter().any(|c| c.name == "tmp" && c.kind == NodeKind::Directory));
/// ```
pub trait DirectoryLister {
    /// Returns true if `path` exists and is a directory.
    ///
    /// Implementations follow a symlink at `path` itself, so a rule may name
    /// a symlinked directory as its root.
    fn is_directory(&self, path: &str) -> bool;

    /// List the immediate children of the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist or cannot be read.
    fn list_children(&self, path: &str) -> io::Result<Vec<DirEntry>>;
}

impl<L: DirectoryLister + ?Sized> DirectoryLister for &L {
    fn is_directory(&self, path: &str) -> bool {
        (**self).is_directory(path)
    }

    fn list_children(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        (**self).list_children(path)
    }
}

/// Production implementation backed by the local disk.
///
/// Listings use a one-level [`WalkDir`] that never follows symlinks, so a
/// symlinked child is reported as [`NodeKind::Symlink`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl DirectoryLister for LocalFilesystem {
    fn is_directory(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn list_children(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut children = Vec::new();
        for entry in walker {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str() else {
                log::warn!(
                    "Skipping non UTF-8 file name under {path}: {:?}",
                    entry.file_name()
                );
                continue;
            };

            let file_type = entry.file_type();
            let kind = if file_type.is_symlink() {
                NodeKind::Symlink
            } else if file_type.is_dir() {
                NodeKind::Directory
            } else {
                NodeKind::File
            };
            children.push(DirEntry::new(name, kind));
        }
        Ok(children)
    }
}

/// In-memory directory tree for deterministic tests.
///
/// Paths are absolute and `/`-separated; trailing slashes are ignored.
/// Adding a node implicitly creates all of its parent directories.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    nodes: BTreeMap<String, NodeKind>,
}

impl MemoryFilesystem {
    /// Create an empty tree containing only the root directory.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(String::new(), NodeKind::Directory);
        Self { nodes }
    }

    /// Add a directory (and its parents).
    #[must_use]
    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert(path, NodeKind::Directory);
        self
    }

    /// Add a regular file (and its parent directories).
    #[must_use]
    pub fn with_file(mut self, path: &str) -> Self {
        self.insert(path, NodeKind::File);
        self
    }

    /// Add a symbolic link (and its parent directories).
    #[must_use]
    pub fn with_symlink(mut self, path: &str) -> Self {
        self.insert(path, NodeKind::Symlink);
        self
    }

    fn insert(&mut self, path: &str, kind: NodeKind) {
        let key = Self::key(path);
        let mut parent = key.as_str();
        while let Some((head, _)) = parent.rsplit_once('/') {
            self.nodes
                .entry(head.to_string())
                .or_insert(NodeKind::Directory);
            parent = head;
        }
        self.nodes.insert(key, kind);
    }

    fn key(path: &str) -> String {
        path.trim_end_matches('/').to_string()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryLister for MemoryFilesystem {
    fn is_directory(&self, path: &str) -> bool {
        self.nodes.get(&Self::key(path)) == Some(&NodeKind::Directory)
    }

    fn list_children(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let key = Self::key(path);
        if self.nodes.get(&key) != Some(&NodeKind::Directory) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {path}"),
            ));
        }

        let prefix = format!("{key}/");
        Ok(self
            .nodes
            .range(prefix.clone()..)
            .take_while(|(node, _)| node.starts_with(&prefix))
            .filter_map(|(node, kind)| {
                let name = &node[prefix.len()..];
                (!name.contains('/')).then(|| DirEntry::new(name, *kind))
            })
            .collect())
    }
}
