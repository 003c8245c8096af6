//! The in-memory table model.
//!
//! A [`CsvTable`] holds an ordered header list and an ordered list of
//! [`Record`]s. Fields can be addressed by position or by header name; name
//! lookups resolve to a position and go through the same path.
//!
//! Header and record widths are independent. A record may have more or fewer
//! fields than there are headers, and lookups past a record's end fail for
//! that call only.
//!
//! ## Examples
//!
//! ```rust
//! use csv_table::{from_str, Error};
//!
//! let mut table = from_str("id,name\n7,Bob").unwrap();
//! assert_eq!(table.field_by_name(0, "name").unwrap(), "Bob");
//!
//! table.set_field_by_name(0, "name", "Robert").unwrap();
//! assert_eq!(table.field(0, 1).unwrap(), "Robert");
//!
//! assert!(matches!(
//!     table.field_by_name(0, "missing"),
//!     Err(Error::UnknownFieldName(_))
//! ));
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One parsed line: an ordered list of field values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    #[must_use]
    pub fn new(fields: Vec<String>) -> Self {
        Record { fields }
    }

    /// All fields in parsed order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The field at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.fields.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Record::new(fields)
    }
}

/// Headers plus records, in input order.
///
/// Tables are filled by [`CsvTable::load`](crate::CsvTable::load) or the
/// crate-level `from_*` functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvTable {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl CsvTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of headers.
    #[must_use]
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of records, not counting the header row.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when there are neither headers nor records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.records.is_empty()
    }

    /// Removes all headers and records.
    pub fn clear(&mut self) {
        self.headers.clear();
        self.records.clear();
    }

    pub(crate) fn replace(&mut self, headers: Vec<String>, records: Vec<Record>) {
        self.headers = headers;
        self.records = records;
    }

    /// The record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordOutOfRange`] past the last record.
    pub fn record(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or(Error::RecordOutOfRange { index })
    }

    fn record_mut(&mut self, index: usize) -> Result<&mut Record> {
        self.records
            .get_mut(index)
            .ok_or(Error::RecordOutOfRange { index })
    }

    /// The value at `(record, field)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_table::from_str;
    ///
    /// let table = from_str("a,b\n1,2").unwrap();
    /// assert_eq!(table.field(0, 1).unwrap(), "2");
    /// assert!(table.field(0, 2).unwrap_err().is_index_out_of_range());
    /// assert!(table.field(1, 0).unwrap_err().is_index_out_of_range());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordOutOfRange`] or [`Error::FieldOutOfRange`].
    pub fn field(&self, record: usize, field: usize) -> Result<&str> {
        self.record(record)?
            .get(field)
            .ok_or(Error::FieldOutOfRange { record, field })
    }

    /// A mutable reference to the value at `(record, field)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordOutOfRange`] or [`Error::FieldOutOfRange`].
    pub fn field_mut(&mut self, record: usize, field: usize) -> Result<&mut String> {
        self.record_mut(record)?
            .get_mut(field)
            .ok_or(Error::FieldOutOfRange { record, field })
    }

    /// Overwrites the value at `(record, field)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordOutOfRange`] or [`Error::FieldOutOfRange`]; the
    /// table is left unchanged.
    pub fn set_field<S: Into<String>>(&mut self, record: usize, field: usize, value: S) -> Result<()> {
        *self.field_mut(record, field)? = value.into();
        Ok(())
    }

    /// Position of the first header equal to `name`.
    #[must_use]
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Resolves `name` for `record`, checking the record first.
    fn resolve(&self, record: usize, name: &str) -> Result<usize> {
        self.record(record)?;
        self.header_index(name)
            .ok_or_else(|| Error::UnknownFieldName(name.to_string()))
    }

    /// The value under header `name` in `record`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordOutOfRange`], [`Error::UnknownFieldName`], or
    /// [`Error::FieldOutOfRange`] when the record is shorter than the header
    /// position.
    pub fn field_by_name(&self, record: usize, name: &str) -> Result<&str> {
        let field = self.resolve(record, name)?;
        self.field(record, field)
    }

    /// Overwrites the value under header `name` in `record`.
    ///
    /// # Errors
    ///
    /// Same as [`CsvTable::field_by_name`].
    pub fn set_field_by_name<S: Into<String>>(
        &mut self,
        record: usize,
        name: &str,
        value: S,
    ) -> Result<()> {
        let field = self.resolve(record, name)?;
        self.set_field(record, field, value)
    }

    /// Pairs headers with the values of `record`, in header order.
    ///
    /// Headers with no value in this record are left out, and a repeated
    /// header keeps its first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_table::from_str;
    ///
    /// let table = from_str("id,name,id\n1,Ann,2").unwrap();
    /// let row = table.record_map(0).unwrap();
    /// assert_eq!(row.len(), 2);
    /// assert_eq!(row["id"], "1");
    /// assert_eq!(row["name"], "Ann");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordOutOfRange`] past the last record.
    pub fn record_map(&self, record: usize) -> Result<IndexMap<&str, &str>> {
        let values = self.record(record)?;
        let mut map = IndexMap::with_capacity(self.headers.len());
        for (header, value) in self.headers.iter().zip(values.iter()) {
            map.entry(header.as_str()).or_insert(value);
        }
        Ok(map)
    }
}
