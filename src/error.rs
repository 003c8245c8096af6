//! Error types for CSV parsing and table access.
//!
//! Errors fall into three groups:
//!
//! - **Parse errors**: bad quoting in a line, reported with line and column.
//!   These abort a whole load.
//! - **Lookup errors**: out-of-range indices and unknown header names. These are
//!   local to one access call and leave the table intact.
//! - **Source errors**: the origin could not be opened or read.
//!
//! ## Examples
//!
//! ```rust
//! use csv_table::{parse_line, Error};
//!
//! let err = parse_line("ab\"cd", false).unwrap_err();
//! assert!(matches!(err, Error::UnquotedQuote { col: 3, .. }));
//! assert!(err.is_parse_error());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while reading CSV or querying a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unbalanced or misplaced double quotes in a quoted field
    #[error("Malformed quoting at line {line}, column {col}: {msg}")]
    MalformedQuoting { line: usize, col: usize, msg: String },

    /// A double quote inside a field that was not opened with one
    #[error("Unquoted field contains a double quote at line {line}, column {col}\nHelp: wrap the field in double quotes and escape inner quotes as \"\"")]
    UnquotedQuote { line: usize, col: usize },

    /// Record width differs from the header width (strict width mode only)
    #[error("Field count mismatch at line {line}: expected {expected} fields, found {found}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// No record at the requested position
    #[error("There is no record at index {index}")]
    RecordOutOfRange { index: usize },

    /// No field at the requested position within a record
    #[error("There is no field at index {field} in record {record}")]
    FieldOutOfRange { record: usize, field: usize },

    /// No header matches the requested name
    #[error("There is no field header with the name '{0}'")]
    UnknownFieldName(String),

    /// The origin could not be opened
    #[error("Source '{path}' is unavailable: {reason}")]
    SourceUnavailable { path: String, reason: String },

    /// IO error while reading lines
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a quoting error at the given column. The line defaults to 1
    /// until the reader attaches the real one with [`Error::at_line`].
    pub fn malformed_quoting(col: usize, msg: &str) -> Self {
        Error::MalformedQuoting {
            line: 1,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an error for a double quote found in an unquoted field.
    pub fn unquoted_quote(col: usize) -> Self {
        Error::UnquotedQuote { line: 1, col }
    }

    /// Creates an error for a file or stream that could not be opened.
    pub fn source_unavailable<T: fmt::Display>(path: &str, reason: T) -> Self {
        Error::SourceUnavailable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error for read failures.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Replaces the line number carried by a parse error.
    ///
    /// Errors without a line number are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_table::Error;
    ///
    /// let err = Error::unquoted_quote(4).at_line(12);
    /// assert!(err.to_string().contains("line 12, column 4"));
    /// ```
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Error::MalformedQuoting { col, msg, .. } => Error::MalformedQuoting { line, col, msg },
            Error::UnquotedQuote { col, .. } => Error::UnquotedQuote { line, col },
            Error::FieldCountMismatch {
                expected, found, ..
            } => Error::FieldCountMismatch {
                line,
                expected,
                found,
            },
            other => other,
        }
    }

    /// True for errors that abort a load because a line could not be parsed.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedQuoting { .. }
                | Error::UnquotedQuote { .. }
                | Error::FieldCountMismatch { .. }
        )
    }

    /// True for record or field positions past the end.
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            Error::RecordOutOfRange { .. } | Error::FieldOutOfRange { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_line_rewrites_parse_errors() {
        let err = Error::malformed_quoting(7, "invalid double quotes").at_line(3);
        assert_eq!(
            err,
            Error::MalformedQuoting {
                line: 3,
                col: 7,
                msg: "invalid double quotes".to_string()
            }
        );
    }

    #[test]
    fn test_at_line_leaves_lookup_errors_alone() {
        let err = Error::RecordOutOfRange { index: 2 }.at_line(9);
        assert_eq!(err, Error::RecordOutOfRange { index: 2 });
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::unquoted_quote(1).is_parse_error());
        assert!(!Error::unquoted_quote(1).is_index_out_of_range());
        assert!(Error::FieldOutOfRange { record: 0, field: 4 }.is_index_out_of_range());
        assert!(!Error::UnknownFieldName("x".into()).is_index_out_of_range());
        assert!(!Error::io("boom").is_parse_error());
    }

    #[test]
    fn test_messages() {
        let err = Error::UnknownFieldName("missing".to_string());
        assert_eq!(
            err.to_string(),
            "There is no field header with the name 'missing'"
        );

        let err = Error::FieldOutOfRange { record: 1, field: 5 };
        assert_eq!(err.to_string(), "There is no field at index 5 in record 1");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref m) if m.contains("bad utf-8")));
    }
}
