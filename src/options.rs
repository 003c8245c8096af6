//! Configuration options for reading CSV.
//!
//! [`ReaderOptions`] controls how lines become records and how a table is
//! populated.
//!
//! ## Examples
//!
//! ```rust
//! use csv_table::{from_str_with_options, ReaderOptions};
//!
//! let options = ReaderOptions::new().with_trim_columns(true);
//! let table = from_str_with_options("name\n\"  Alice  \"", options).unwrap();
//! assert_eq!(table.field(0, 0).unwrap(), "Alice");
//! ```

/// Configuration options for [`CsvReader`](crate::CsvReader) and table loading.
///
/// # Examples
///
/// ```rust
/// use csv_table::ReaderOptions;
///
/// // First line is the header row, fields kept as parsed
/// let options = ReaderOptions::new();
/// assert!(options.has_header_row);
/// assert!(!options.trim_columns);
///
/// // Headerless data, whitespace trimmed, every row the same width
/// let options = ReaderOptions::new()
///     .with_header_row(false)
///     .with_trim_columns(true)
///     .with_strict_width(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Treat the first non-blank line as the header row.
    pub has_header_row: bool,
    /// Trim leading and trailing whitespace from every field, quoted ones included.
    pub trim_columns: bool,
    /// Reject records whose field count differs from the header count.
    pub strict_width: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            has_header_row: true,
            trim_columns: false,
            strict_width: false,
        }
    }
}

impl ReaderOptions {
    /// Creates default options (header row on, no trimming, permissive width).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for input without a header row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_table::ReaderOptions;
    ///
    /// let options = ReaderOptions::headerless();
    /// assert!(!options.has_header_row);
    /// ```
    #[must_use]
    pub fn headerless() -> Self {
        ReaderOptions {
            has_header_row: false,
            ..Default::default()
        }
    }

    /// Sets whether the first non-blank line holds the headers.
    #[must_use]
    pub fn with_header_row(mut self, has_header_row: bool) -> Self {
        self.has_header_row = has_header_row;
        self
    }

    /// Sets whether every field is trimmed on both sides.
    ///
    /// Unquoted fields always lose trailing whitespace and leading spaces;
    /// this extends trimming to quoted content and leading tabs.
    #[must_use]
    pub fn with_trim_columns(mut self, trim_columns: bool) -> Self {
        self.trim_columns = trim_columns;
        self
    }

    /// Sets whether records must match the header width.
    ///
    /// Without a header row the first record sets the expected width.
    #[must_use]
    pub fn with_strict_width(mut self, strict_width: bool) -> Self {
        self.strict_width = strict_width;
        self
    }
}
