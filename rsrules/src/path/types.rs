//! Core types for path handling.

use std::fmt;

use crate::error::{Error, Result};

/// An absolute, forward-slash separated path as used inside rule files.
///
/// A trailing `/` is significant: it marks the path as a directory, while a
/// path without one denotes a single file.
///
/// # Examples
///
/// ```
/// use rsrules::path::CanonicalPath;
///
/// let dir = CanonicalPath::new("/mnt/c/data/").unwrap();
/// assert!(dir.is_directory());
///
/// let file = CanonicalPath::new("/mnt/c/data/a.txt").unwrap();
/// assert!(!file.is_directory());
///
/// assert!(CanonicalPath::new("relative/path").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Wrap a string that is already in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is not rooted at `/`.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(Error::InvalidPath {
                path,
                reason: "canonical paths must start with '/'".to_string(),
            });
        }
        Ok(Self(path))
    }

    /// Constructor for values produced by the normalizer, which are rooted
    /// by construction.
    pub(crate) fn from_normalized(path: String) -> Self {
        debug_assert!(path.starts_with('/'));
        Self(path)
    }

    /// Returns the path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the path ends in `/` and therefore names a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
