//! CLI command implementations.
//!
//! - `compile`: Compile a rule file into an rsync filter file
//! - `check`: Report what a rule file contains without compiling it
//! - `normalize`: Print the canonical form of path tokens
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod compile;
pub mod completions;
pub mod normalize;

pub use check::{CheckCommand, ReportFormat};
pub use compile::CompileCommand;
pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
