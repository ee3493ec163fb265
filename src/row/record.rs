//! The CSV row record.
//!
//! A [`Record`] keeps the column names and the raw field strings as two
//! parallel sequences, plus a [`NameIndex`] fixed at construction time.
//! Reads go through the index; appends go to the sequences only.

use std::sync::Arc;

use super::header::NameIndex;
use crate::error::RecordError;
use crate::value::Value;

/// One delimited-text row addressable by column name.
///
/// # Example
///
/// ```
/// use csv_record::{Record, Value};
///
/// let mut record = Record::with_header(
///     vec!["id".to_string(), "name".to_string()],
///     vec!["7".to_string(), "Al".to_string()],
/// );
/// assert_eq!(record.get("name").unwrap(), Value::from_string("Al"));
///
/// record.set("score", &Value::Int(10)).unwrap();
/// assert_eq!(record.to_delimited_text(b',').unwrap(), b"7,Al,10");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Field names in definition/append order. May contain duplicates.
    column_names: Vec<String>,
    /// Raw field strings, positionally aligned with the source row.
    values: Vec<String>,
    /// Name to position lookup used by [`Record::get`]. Never updated by [`Record::set`].
    name_index: Arc<NameIndex>,
}

impl Record {
    /// Creates an empty record with an empty name index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a record from a parsed row.
    ///
    /// `column_names` and `values` may differ in length; `name_index` is
    /// normally shared by every row read from the same header.
    pub fn from_parts(
        column_names: Vec<String>,
        values: Vec<String>,
        name_index: Arc<NameIndex>,
    ) -> Self {
        Self {
            column_names,
            values,
            name_index,
        }
    }

    /// Assembles a record whose name index is built from `column_names`.
    pub fn with_header(column_names: Vec<String>, values: Vec<String>) -> Self {
        let name_index = Arc::new(NameIndex::from_names(column_names.iter().cloned()));
        Self::from_parts(column_names, values, name_index)
    }

    /// Returns the value of the column `name`.
    ///
    /// A column known to the name index but missing from a short row reads
    /// as the empty string.
    ///
    /// # Errors
    ///
    /// [`RecordError::FieldNotFound`] if `name` is not in the name index.
    pub fn get(&self, name: &str) -> Result<Value, RecordError> {
        let index = self
            .name_index
            .position(name)
            .ok_or_else(|| RecordError::FieldNotFound(name.to_string()))?;

        match self.values.get(index) {
            Some(raw) => Ok(Value::from_string(raw.as_str())),
            None => Ok(Value::from_string("")),
        }
    }

    /// Appends a field.
    ///
    /// The name is not checked for uniqueness and the name index is left
    /// unchanged, so the new field is not reachable through [`Record::get`].
    ///
    /// # Errors
    ///
    /// [`RecordError::InvalidValue`] if `value` has no CSV string form; the
    /// record is not modified in that case.
    pub fn set(&mut self, name: impl Into<String>, value: &Value) -> Result<(), RecordError> {
        let rendered = value.csv_string()?;
        self.column_names.push(name.into());
        self.values.push(rendered);
        Ok(())
    }

    /// Column names in definition order, including names appended by [`Record::set`].
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Raw field values, positionally aligned with the source row.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The lookup used by [`Record::get`]. Names added by `set` are not in it.
    pub fn name_index(&self) -> &NameIndex {
        &self.name_index
    }

    /// Number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the row has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
