//! Record-at-a-time CSV reading.
//!
//! [`CsvReader`] couples a [`LineSource`] with a [`LineParser`]. Records are
//! pulled one line at a time, either through [`CsvReader::read_next_record`]
//! or through the [`Iterator`] implementation.
//!
//! ## Examples
//!
//! ```rust
//! use csv_table::{CsvReader, ReaderOptions};
//!
//! let mut reader = CsvReader::from_string("a,b\n1,2", ReaderOptions::new());
//! while reader.read_next_record().unwrap() {
//!     println!("{:?}", reader.fields().unwrap());
//! }
//! assert!(reader.fields().is_none());
//! ```

use crate::loader;
use crate::{CsvTable, LineParser, LineSource, ReaderOptions, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use tracing::trace;

/// Reads parsed records from a line source.
#[derive(Debug)]
pub struct CsvReader<R> {
    source: LineSource<R>,
    parser: LineParser,
    options: ReaderOptions,
    fields: Option<Vec<String>>,
}

impl<R: BufRead> CsvReader<R> {
    /// Creates a reader over any buffered reader.
    pub fn new(reader: R, options: ReaderOptions) -> Self {
        Self::from_source(LineSource::new(reader), options)
    }

    /// Creates a reader over an existing line source.
    pub fn from_source(source: LineSource<R>, options: ReaderOptions) -> Self {
        CsvReader {
            source,
            parser: LineParser::new(options.trim_columns),
            options,
            fields: None,
        }
    }

    /// The options this reader was created with.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Reads and parses the next non-blank line.
    ///
    /// Returns `false` once the input is exhausted. The parsed fields are
    /// available from [`CsvReader::fields`] until the next call.
    ///
    /// # Errors
    ///
    /// Returns an I/O error from the source, or a parse error carrying the
    /// physical line number. On error no fields are stored.
    pub fn read_next_record(&mut self) -> Result<bool> {
        self.fields = None;
        let line = match self.source.next_line()? {
            Some(line) => line,
            None => return Ok(false),
        };
        let parsed = self.parser.parse(line);
        let line_number = self.source.line_number();
        let fields = parsed.map_err(|e| e.at_line(line_number))?;
        trace!(line = line_number, fields = fields.len(), "parsed record");
        self.fields = Some(fields);
        Ok(true)
    }

    /// Fields of the current record, or `None` before the first read and after
    /// the end of input.
    #[must_use]
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    /// Number of fields in the current record.
    #[must_use]
    pub fn field_count(&self) -> Option<usize> {
        self.fields.as_ref().map(Vec::len)
    }

    /// The physical line number of the current record.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.source.line_number()
    }

    /// Takes the current record's fields, leaving `None` behind.
    pub fn take_fields(&mut self) -> Option<Vec<String>> {
        self.fields.take()
    }

    /// Consumes the reader, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}

impl<R: BufRead + Seek> CsvReader<R> {
    /// Rewinds to the start of the origin and reads everything into a table.
    ///
    /// The first line always becomes the header row, regardless of
    /// [`ReaderOptions::has_header_row`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_table::{CsvReader, ReaderOptions};
    ///
    /// let mut reader = CsvReader::from_string("id,name\n7,Bob", ReaderOptions::headerless());
    /// reader.read_next_record().unwrap();
    ///
    /// let table = reader.read_into_table().unwrap();
    /// assert_eq!(table.headers(), ["id", "name"]);
    /// assert_eq!(table.field_by_name(0, "name").unwrap(), "Bob");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the origin cannot seek or any line fails to parse.
    pub fn read_into_table(&mut self) -> Result<CsvTable> {
        self.source.rewind()?;
        self.fields = None;

        let mut table = CsvTable::new();
        loader::populate(&mut table, self, true)?;
        Ok(table)
    }
}

impl CsvReader<BufReader<File>> {
    /// Opens a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`](crate::Error::SourceUnavailable) if
    /// the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Result<Self> {
        Ok(Self::from_source(LineSource::open(path)?, options))
    }
}

impl CsvReader<Cursor<String>> {
    /// Reads CSV from an in-memory string.
    pub fn from_string<S: Into<String>>(content: S, options: ReaderOptions) -> Self {
        Self::from_source(LineSource::from_string(content), options)
    }
}

impl<R: BufRead> Iterator for CsvReader<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_next_record() {
            Ok(true) => self.take_fields().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
