//! Path handling for rule files.
//!
//! This module converts the path tokens written in a rule file into the
//! canonical form used everywhere else, and derives the ancestor chains that
//! keep nested includes reachable.
//!
//! # Canonical Form
//!
//! A [`CanonicalPath`] is absolute and forward-slash separated. Tokens in
//! Windows form are mapped under `/mnt/<drive>/`, the layout used by WSL:
//!
//! ```
//! use rsrules::path::normalize;
//!
//! let path = normalize("C:\\Users\\foo\\").unwrap();
//! assert_eq!(path.as_str(), "/mnt/c/Users/foo/");
//! assert!(path.is_directory());
//! ```
//!
//! # Ancestor Chains
//!
//! ```
//! use rsrules::path::{ancestors, normalize};
//!
//! let path = normalize("/srv/www/site/index.html").unwrap();
//! assert_eq!(ancestors(&path).len(), 3);
//! ```

pub mod ancestors;
pub mod normalize;
mod types;

// Re-export key types
pub use ancestors::ancestors;
pub use normalize::normalize;
pub use types::CanonicalPath;
