//! # csv_table
//!
//! A line-oriented CSV reader that loads text into an in-memory table with
//! header-aware field access.
//!
//! ## Key Features
//!
//! - **Single-pass line parser**: quoted fields, embedded commas, `""` escapes,
//!   empty fields and trailing delimiters
//! - **Blank line skipping**: empty and space-only lines never become records
//! - **Dual addressing**: look fields up by position or by header name
//! - **Fail-fast loading**: a malformed line aborts the load, with the line
//!   and column in the error
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use csv_table::from_str;
//!
//! let table = from_str("id,name\n7,Bob\n8,\"Smith, Jane\"").unwrap();
//!
//! assert_eq!(table.headers(), ["id", "name"]);
//! assert_eq!(table.record_count(), 2);
//! assert_eq!(table.field_by_name(1, "name").unwrap(), "Smith, Jane");
//! ```
//!
//! ### Parsing single lines
//!
//! ```rust
//! use csv_table::parse_line;
//!
//! let fields = parse_line(r#"x,"He said ""hi""",y,"#, false).unwrap();
//! assert_eq!(fields, vec!["x", r#"He said "hi""#, "y", ""]);
//! ```
//!
//! ### Streaming records
//!
//! ```rust
//! use csv_table::{CsvReader, ReaderOptions};
//!
//! let reader = CsvReader::from_string("a,b\n1,2\n3,4", ReaderOptions::new());
//! let rows = reader.collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(rows.len(), 3);
//! ```
//!
//! ## Limitations
//!
//! Line breaks inside quoted fields are not supported, the input must be
//! UTF-8, and all values are kept as strings.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Load a table and read fields
//! - **`lookup.rs`** - Name lookups, edits and lookup errors
//! - **`streaming.rs`** - Record-at-a-time reading from a file
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod loader;
pub mod options;
pub mod parser;
pub mod reader;
pub mod source;
pub mod table;

pub use error::{Error, Result};
pub use options::ReaderOptions;
pub use parser::LineParser;
pub use reader::CsvReader;
pub use source::LineSource;
pub use table::{CsvTable, Record};

use std::io;
use std::path::Path;

/// Parse one line of CSV into its fields.
///
/// With `trim` set, every field is trimmed on both sides.
///
/// # Examples
///
/// ```rust
/// use csv_table::parse_line;
///
/// assert_eq!(parse_line("a, b ,c", false).unwrap(), vec!["a", "b", "c"]);
/// assert!(parse_line("\"open", false).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedQuoting`] or [`Error::UnquotedQuote`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_line(line: &str, trim: bool) -> Result<Vec<String>> {
    LineParser::new(trim).parse(line)
}

/// Load a table from CSV text, treating the first line as headers.
///
/// # Errors
///
/// Returns the first parse error encountered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(content: &str) -> Result<CsvTable> {
    from_str_with_options(content, ReaderOptions::default())
}

/// Load a table from CSV text with custom options.
///
/// # Examples
///
/// ```rust
/// use csv_table::{from_str_with_options, ReaderOptions};
///
/// let table = from_str_with_options("1,2\n3,4", ReaderOptions::headerless()).unwrap();
/// assert_eq!(table.header_count(), 0);
/// assert_eq!(table.record_count(), 2);
/// ```
///
/// # Errors
///
/// Returns the first parse or width error encountered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(content: &str, options: ReaderOptions) -> Result<CsvTable> {
    let mut table = CsvTable::new();
    table.load_str(content, options)?;
    Ok(table)
}

/// Load a table from an I/O stream of CSV, treating the first line as headers.
///
/// # Examples
///
/// ```rust
/// use csv_table::from_reader;
/// use std::io::Cursor;
///
/// let table = from_reader(Cursor::new(b"x,y\n1,2")).unwrap();
/// assert_eq!(table.field_by_name(0, "y").unwrap(), "2");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or a line is
/// malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<CsvTable> {
    from_reader_with_options(reader, ReaderOptions::default())
}

/// Load a table from an I/O stream of CSV with custom options.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or a line is
/// malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read>(reader: R, options: ReaderOptions) -> Result<CsvTable> {
    let mut table = CsvTable::new();
    table.load_reader(reader, options)?;
    Ok(table)
}

/// Load a table from a CSV file, treating the first line as headers.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the file cannot be opened, or the
/// first read or parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CsvTable> {
    from_path_with_options(path, ReaderOptions::default())
}

/// Load a table from a CSV file with custom options.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the file cannot be opened, or the
/// first read, parse, or width error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path_with_options<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Result<CsvTable> {
    let mut table = CsvTable::new();
    table.load_path(path, options)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_simple_data() {
        let table = from_str("a,b,c\n1,2,3\n4,5,6").unwrap();
        assert_eq!(table.headers(), ["a", "b", "c"]);
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.record(0).unwrap().fields(), ["1", "2", "3"]);
        assert_eq!(table.record(1).unwrap().fields(), ["4", "5", "6"]);
    }

    #[test]
    fn test_blank_lines_are_not_records() {
        let table = from_str("a,b\n   \n1,2").unwrap();
        assert_eq!(table.record_count(), 1);
        assert_eq!(table.record(0).unwrap().fields(), ["1", "2"]);
    }

    #[test]
    fn test_name_lookup() {
        let table = from_str("id,name\n7,Bob").unwrap();
        assert_eq!(table.field_by_name(0, "name").unwrap(), "Bob");
        assert!(matches!(
            table.field_by_name(0, "missing"),
            Err(Error::UnknownFieldName(ref n)) if n == "missing"
        ));
    }

    #[test]
    fn test_trim_columns_option() {
        let options = ReaderOptions::new().with_trim_columns(true);
        let table = from_str_with_options("h\n\" padded \"", options).unwrap();
        assert_eq!(table.field(0, 0).unwrap(), "padded");

        let table = from_str("h\n\" padded \"").unwrap();
        assert_eq!(table.field(0, 0).unwrap(), " padded ");
    }

    #[test]
    fn test_empty_input() {
        let table = from_str("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_error_aborts_load() {
        let err = from_str("a\nok\nab\"cd\nfine").unwrap_err();
        assert_eq!(err, Error::UnquotedQuote { line: 3, col: 3 });
    }
}
