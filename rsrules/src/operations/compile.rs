//! The end-to-end compile operation: read a rule file, compile it, write the
//! filter file.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::compiler::{CompileStage, CompileStats, RuleCompiler};
use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::fs::DirectoryLister;
use crate::rules::{ParseMode, RuleCounts, RuleParser, UnrecognizedLine};
use crate::writer::FilterWriter;

/// Options for a compile operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Rule-specification file to read.
    pub input: PathBuf,

    /// Filter file to write.
    pub output: PathBuf,

    /// How lines without a recognized marker are handled.
    pub mode: ParseMode,

    /// Write through a temporary file and rename into place.
    pub atomic: bool,
}

impl CompileOptions {
    /// Creates options for the given files, with lenient parsing and atomic
    /// output.
    ///
    /// # Examples
    ///
    /// ```
    /// use rsrules::operations::CompileOptions;
    /// use rsrules::rules::ParseMode;
    ///
    /// let options = CompileOptions::new("input_rules.rsync", "pattern_rules.rsync");
    /// assert_eq!(options.mode, ParseMode::Lenient);
    /// assert!(options.atomic);
    /// ```
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode: ParseMode::Lenient,
            atomic: true,
        }
    }

    /// Sets the parse mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether output is written atomically.
    #[must_use]
    pub const fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}

impl From<&ResolvedConfig> for CompileOptions {
    fn from(config: &ResolvedConfig) -> Self {
        Self::new(&config.input, &config.output)
            .with_mode(config.parse_mode())
            .with_atomic(config.atomic)
    }
}

/// Progress of a compile operation, reported to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileEvent<'a> {
    /// The rule file is being read and parsed.
    ReadingRules(&'a Path),
    /// A compilation stage has started.
    Stage(CompileStage),
    /// The filter file is being written.
    Writing(&'a Path),
}

impl fmt::Display for CompileEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadingRules(_) => write!(f, "Processing rules file..."),
            Self::Stage(stage) => write!(f, "{stage}"),
            Self::Writing(path) => write!(f, "Writing pattern rules to {}...", path.display()),
        }
    }
}

/// Summary of a completed compile operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    /// The rule file that was read.
    pub input: PathBuf,
    /// The filter file that was written.
    pub output: PathBuf,
    /// Rules parsed per category.
    pub rules: RuleCounts,
    /// Lines skipped in lenient mode.
    pub unrecognized: Vec<UnrecognizedLine>,
    /// Entry counts from compilation.
    pub stats: CompileStats,
    /// Lines in the filter file, including the catch-all.
    pub lines_written: usize,
}

/// Run the full pipeline: parse `options.input`, compile it against
/// `lister`, and write `options.output`.
///
/// Every written line is mirrored to `echo` when one is given. `observer`
/// is called as each phase begins.
///
/// # Errors
///
/// Returns [`Error::RuleFileNotFound`](crate::Error::RuleFileNotFound) if
/// the rule file cannot be read, a parse error from [`RuleParser::parse`],
/// or [`Error::OutputWrite`](crate::Error::OutputWrite) if the filter file
/// cannot be written. Nothing is written when parsing fails.
///
/// # Examples
///
/// ```
/// use rsrules::fs::MemoryFilesystem;
/// use rsrules::operations::{compile_rules, CompileOptions};
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// let input = dir.path().join("input_rules.rsync");
/// let output = dir.path().join("pattern_rules.rsync");
/// fs::write(&input, "+ /srv/www/index.html\n").unwrap();
///
/// let options = CompileOptions::new(&input, &output);
/// let report = compile_rules(&options, MemoryFilesystem::new(), None, |_| {}).unwrap();
///
/// assert_eq!(report.lines_written, 4);
/// assert_eq!(
///     fs::read_to_string(&output).unwrap(),
///     "+ /srv/\n+ /srv/www/\n+ /srv/www/index.html\n- *\n"
/// );
/// ```
pub fn compile_rules<L, F>(
    options: &CompileOptions,
    lister: L,
    echo: Option<&mut dyn Write>,
    mut observer: F,
) -> Result<CompileReport>
where
    L: DirectoryLister,
    F: FnMut(CompileEvent<'_>),
{
    observer(CompileEvent::ReadingRules(&options.input));
    let rules = RuleParser::with_mode(options.mode).parse_file(&options.input)?;
    let counts = rules.counts();
    let unrecognized = rules.unrecognized().to_vec();

    let compiler = RuleCompiler::new(lister);
    let (entries, stats) =
        compiler.compile_observed(rules, |stage| observer(CompileEvent::Stage(stage)));

    observer(CompileEvent::Writing(&options.output));
    let mut writer = FilterWriter::new();
    if let Some(sink) = echo {
        writer = writer.with_echo(sink);
    }
    let lines_written = writer.write_to_path(&entries, &options.output, options.atomic)?;

    Ok(CompileReport {
        input: options.input.clone(),
        output: options.output.clone(),
        rules: counts,
        unrecognized,
        stats,
        lines_written,
    })
}
