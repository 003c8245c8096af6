//! Populating a [`CsvTable`] from a [`CsvReader`].
//!
//! A load clears the table and then fills it. With a header row, the first
//! parsed line becomes the headers. Every other line becomes one record,
//! with fields copied as parsed and no padding or truncation.
//!
//! Any error aborts the load and leaves the table empty.

use crate::{CsvReader, CsvTable, Error, ReaderOptions, Record, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

impl CsvTable {
    /// Clears the table and fills it from `reader`.
    ///
    /// The reader, and whatever handle it owns, is dropped when the load
    /// returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_table::{CsvReader, CsvTable, ReaderOptions};
    ///
    /// let reader = CsvReader::from_string("a,b,c\n1,2,3\n4,5,6", ReaderOptions::new());
    /// let mut table = CsvTable::new();
    /// table.load(reader).unwrap();
    ///
    /// assert_eq!(table.headers(), ["a", "b", "c"]);
    /// assert_eq!(table.record_count(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first I/O, parse, or width error encountered.
    pub fn load<R: BufRead>(&mut self, mut reader: CsvReader<R>) -> Result<()> {
        let has_header_row = reader.options().has_header_row;
        populate(self, &mut reader, has_header_row)
    }

    /// Clears the table and fills it from CSV text.
    ///
    /// # Errors
    ///
    /// Returns the first parse or width error encountered.
    pub fn load_str(&mut self, content: &str, options: ReaderOptions) -> Result<()> {
        self.load(CsvReader::new(content.as_bytes(), options))
    }

    /// Clears the table and fills it from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the file cannot be opened, or
    /// the first read, parse, or width error.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P, options: ReaderOptions) -> Result<()> {
        self.clear();
        let reader: CsvReader<BufReader<File>> = CsvReader::open(path, options)?;
        self.load(reader)
    }

    /// Clears the table and fills it from any byte stream.
    ///
    /// # Errors
    ///
    /// Returns the first read, parse, or width error encountered.
    pub fn load_reader<T: Read>(&mut self, read: T, options: ReaderOptions) -> Result<()> {
        self.load(CsvReader::new(BufReader::new(read), options))
    }
}

/// Fills `table` from the remaining records of `reader`.
pub(crate) fn populate<R: BufRead>(
    table: &mut CsvTable,
    reader: &mut CsvReader<R>,
    has_header_row: bool,
) -> Result<()> {
    table.clear();

    let strict_width = reader.options().strict_width;
    let mut headers: Option<Vec<String>> = None;
    let mut width: Option<usize> = None;
    let mut records = Vec::new();

    while reader.read_next_record()? {
        let fields = reader.take_fields().unwrap_or_default();

        if has_header_row && headers.is_none() {
            width = Some(fields.len());
            headers = Some(fields);
            continue;
        }

        if strict_width {
            match width {
                Some(expected) if expected != fields.len() => {
                    return Err(Error::FieldCountMismatch {
                        line: reader.line_number(),
                        expected,
                        found: fields.len(),
                    });
                }
                Some(_) => {}
                None => width = Some(fields.len()),
            }
        }

        records.push(Record::new(fields));
    }

    let headers = headers.unwrap_or_default();
    debug!(
        headers = headers.len(),
        records = records.len(),
        "loaded csv table"
    );
    table.replace(headers, records);
    Ok(())
}
