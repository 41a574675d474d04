//! Filter file output.
//!
//! The filter file holds one `+ <entry>` line per compiled entry, in sorted
//! order, followed by a single `- *` line. rsync applies the first matching
//! rule, so the trailing catch-all turns the list into an allow-list.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::entry::CompiledFilterList;
use crate::error::{Error, Result};

/// Prefix of every include line.
pub const INCLUDE_PREFIX: &str = "+ ";

/// The terminal catch-all exclude line.
pub const CATCH_ALL: &str = "- *";

/// Writes compiled filter lists, optionally mirroring each line to an echo
/// sink such as stdout.
///
/// # Examples
///
/// ```
/// use rsrules::writer::FilterWriter;
/// use rsrules::{CompiledFilterList, FilterEntry};
///
/// let list: CompiledFilterList = vec![FilterEntry::directory("/mnt")].into_iter().collect();
///
/// let mut echo = Vec::new();
/// let mut out = Vec::new();
/// FilterWriter::new().with_echo(&mut echo).write(&list, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "+ /mnt/\n- *\n");
/// assert_eq!(String::from_utf8(echo).unwrap(), "+ /mnt/\n- *\n");
/// ```
#[derive(Default)]
pub struct FilterWriter<'a> {
    echo: Option<&'a mut dyn Write>,
}

impl<'a> FilterWriter<'a> {
    /// Create a writer without an echo sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror every emitted line to `sink`.
    #[must_use]
    pub fn with_echo(mut self, sink: &'a mut dyn Write) -> Self {
        self.echo = Some(sink);
        self
    }

    /// Write the filter lines to `destination`.
    ///
    /// Returns the number of lines written, including the catch-all.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the destination or the echo sink.
    pub fn write<W: Write>(
        &mut self,
        entries: &CompiledFilterList,
        destination: &mut W,
    ) -> io::Result<usize> {
        for entry in entries {
            self.emit(destination, format_args!("{INCLUDE_PREFIX}{entry}"))?;
        }
        self.emit(destination, format_args!("{CATCH_ALL}"))?;

        destination.flush()?;
        if let Some(echo) = self.echo.as_mut() {
            echo.flush()?;
        }
        Ok(entries.len() + 1)
    }

    /// Write the filter file at `path`.
    ///
    /// With `atomic` set, lines go to a temporary file in the same directory
    /// which is renamed over `path` only after every line has been written.
    /// A failure then leaves any existing file at `path` untouched. Without
    /// it, `path` is truncated and written in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputWrite`] if the file cannot be created, written,
    /// flushed or renamed into place.
    pub fn write_to_path(
        &mut self,
        entries: &CompiledFilterList,
        path: &Path,
        atomic: bool,
    ) -> Result<usize> {
        let output_error = |source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        };

        if !atomic {
            let mut file = BufWriter::new(File::create(path).map_err(output_error)?);
            return self.write(entries, &mut file).map_err(output_error);
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(output_error)?;
        let written = {
            let mut buffered = BufWriter::new(temp.as_file_mut());
            self.write(entries, &mut buffered).map_err(output_error)?
        };
        temp.as_file().sync_all().map_err(output_error)?;
        temp.persist(path).map_err(|e| output_error(e.error))?;

        log::debug!("Wrote {written} filter lines to {}", path.display());
        Ok(written)
    }

    fn emit<W: Write>(&mut self, destination: &mut W, line: fmt::Arguments<'_>) -> io::Result<()> {
        writeln!(destination, "{line}")?;
        if let Some(echo) = self.echo.as_mut() {
            writeln!(echo, "{line}")?;
        }
        Ok(())
    }
}
