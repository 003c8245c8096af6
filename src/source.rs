//! Line sources.
//!
//! [`LineSource`] pulls logical lines from any [`BufRead`] and skips lines that
//! are empty or contain only spaces. Files and in-memory strings get dedicated
//! constructors.
//!
//! The underlying handle is owned by the source and released when it is
//! dropped.
//!
//! ## Examples
//!
//! ```rust
//! use csv_table::LineSource;
//!
//! let mut source = LineSource::from_string("a,b\n   \n\n1,2\n");
//! assert_eq!(source.next_line().unwrap(), Some("a,b"));
//! assert_eq!(source.next_line().unwrap(), Some("1,2"));
//! assert_eq!(source.line_number(), 4);
//! assert_eq!(source.next_line().unwrap(), None);
//! ```

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, trace};

const BOM: char = '\u{feff}';

/// A forward-only reader of non-blank lines.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    line: String,
    line_number: usize,
}

impl<R: BufRead> LineSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        LineSource {
            reader,
            line: String::new(),
            line_number: 0,
        }
    }

    /// Returns the next line that is neither empty nor made only of spaces,
    /// without its line terminator. Returns `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails or the input is not valid UTF-8.
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            if self.line.ends_with('\n') {
                self.line.pop();
                if self.line.ends_with('\r') {
                    self.line.pop();
                }
            }
            if self.line_number == 1 && self.line.starts_with(BOM) {
                self.line.replace_range(..BOM.len_utf8(), "");
            }

            if self.line.chars().all(|c| c == ' ') {
                trace!(line = self.line_number, "skipping blank line");
                continue;
            }
            return Ok(Some(&self.line));
        }
    }

    /// The 1-based physical line number of the last line read, counting
    /// skipped blank lines. Zero before the first read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consumes the source, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead + Seek> LineSource<R> {
    /// Moves back to the start of the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the origin cannot seek.
    pub fn rewind(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line.clear();
        self.line_number = 0;
        Ok(())
    }
}

impl LineSource<BufReader<File>> {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::source_unavailable(&path.display().to_string(), e))?;
        debug!(path = %path.display(), "opened csv source");
        Ok(LineSource::new(BufReader::new(file)))
    }
}

impl LineSource<Cursor<String>> {
    /// Reads lines from an in-memory string.
    pub fn from_string<S: Into<String>>(content: S) -> Self {
        LineSource::new(Cursor::new(content.into()))
    }
}
