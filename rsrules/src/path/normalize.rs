//! Path token normalization.
//!
//! Rule files may be shared between a Linux machine and a Windows machine
//! running WSL, so a path token can arrive in either form:
//! - `/home/user/docs/` is already canonical and is kept verbatim
//! - `C:\Users\foo\` is a drive-letter path and maps to `/mnt/c/Users/foo/`

use crate::error::{Error, Result};
use crate::path::CanonicalPath;

/// Prefix under which foreign drive letters are mounted.
pub const MOUNT_ROOT: &str = "/mnt/";

/// Normalize a single path token into its canonical form.
///
/// Trailing whitespace is trimmed. A token that starts with `/` is returned
/// unchanged. Anything else is treated as a drive-letter path: the first `:`
/// is removed, every `\` becomes `/`, the drive letter is lower-cased and the
/// result is placed under [`MOUNT_ROOT`].
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the token is empty after trimming.
///
/// # Examples
///
/// ```
/// use rsrules::path::normalize;
///
/// assert_eq!(normalize("C:\\Users\\foo").unwrap().as_str(), "/mnt/c/Users/foo");
/// assert_eq!(normalize("D:\\photos\\").unwrap().as_str(), "/mnt/d/photos/");
/// assert_eq!(normalize("/already/unix/path").unwrap().as_str(), "/already/unix/path");
/// assert!(normalize("   ").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<CanonicalPath> {
    let token = raw.trim_end();
    if token.is_empty() {
        return Err(Error::InvalidPath {
            path: raw.to_string(),
            reason: "path is empty".to_string(),
        });
    }

    if token.starts_with('/') {
        return Ok(CanonicalPath::from_normalized(token.to_string()));
    }

    let converted = token.replacen(':', "", 1).replace('\\', "/");
    let mut chars = converted.chars();
    let mut canonical = String::with_capacity(MOUNT_ROOT.len() + converted.len());
    canonical.push_str(MOUNT_ROOT);
    if let Some(drive) = chars.next() {
        canonical.extend(drive.to_lowercase());
    }
    canonical.push_str(chars.as_str());

    Ok(CanonicalPath::from_normalized(canonical))
}

/// Convert a partial-exclude fragment into its `/fragment/` form.
///
/// Backslashes become forward slashes and the fragment is forced to both
/// start and end with `/`, so it matches a whole directory name rather than
/// an arbitrary part of a file name.
///
/// A fragment with no directory name collapses to `/`, which every entry
/// contains. It is accepted with a warning.
///
/// # Examples
///
/// ```
/// use rsrules::path::normalize::partial_pattern;
///
/// assert_eq!(partial_pattern("cache"), "/cache/");
/// assert_eq!(partial_pattern("\\node_modules"), "/node_modules/");
/// assert_eq!(partial_pattern("/.git/"), "/.git/");
/// assert_eq!(partial_pattern("/"), "/");
/// ```
#[must_use]
pub fn partial_pattern(raw: &str) -> String {
    let mut pattern = raw.trim_end().replace('\\', "/");
    if pattern.chars().all(|c| c == '/') {
        log::warn!("Partial exclude '{raw}' has no directory name and removes every entry");
        return "/".to_string();
    }

    if !pattern.starts_with('/') {
        pattern.insert(0, '/');
    }
    if !pattern.ends_with('/') {
        pattern.push('/');
    }
    pattern
}
