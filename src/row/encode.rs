//! Delimited-text and JSON encoders for [`Record`].
//!
//! Neither encoder mutates the record; encoding the same record twice
//! yields identical bytes.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::{Map, Value as JsonValue};
use tracing::trace;

use super::record::Record;
use crate::error::{EncodingError, RecordError};
use crate::json_path;

impl Record {
    /// Encodes the values as one delimited-text line without a trailing newline.
    ///
    /// Fields containing the delimiter, a quote or a line break are quoted,
    /// with embedded quotes doubled. Column names are not written.
    ///
    /// The delimiter is a single byte, so only ASCII delimiters can be
    /// expressed. Multi-byte characters such as `¦` are not supported.
    ///
    /// # Example
    ///
    /// ```
    /// use csv_record::Record;
    ///
    /// let record = Record::with_header(
    ///     vec!["a".into(), "b".into(), "c".into()],
    ///     vec!["a".into(), "b,c".into(), "d\"e".into()],
    /// );
    /// assert_eq!(record.to_delimited_text(b',').unwrap(), br#"a,"b,c","d""e""#);
    /// ```
    ///
    /// # Errors
    ///
    /// [`EncodingError::Csv`] or [`EncodingError::Io`] if the writer fails.
    pub fn to_delimited_text(&self, field_delimiter: u8) -> Result<Vec<u8>, RecordError> {
        // The csv writer emits `""` for a row with no bytes in it; such a row
        // is an empty line here.
        if self.values().len() <= 1 && self.values().iter().all(String::is_empty) {
            return Ok(Vec::new());
        }

        let mut buf = Vec::new();
        {
            let mut writer = WriterBuilder::new()
                .delimiter(field_delimiter)
                .quote_style(QuoteStyle::Necessary)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(&mut buf);
            writer
                .write_record(self.values())
                .map_err(EncodingError::Csv)?;
            writer.flush().map_err(EncodingError::Io)?;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(buf)
    }

    /// Encodes the record as a JSON object keyed by column name.
    ///
    /// Columns are applied from the last to the first, so when a name occurs
    /// more than once the value at its lowest position is the one kept.
    /// Dotted names become nested objects, and columns past the end of a
    /// short row are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use csv_record::Record;
    ///
    /// let record = Record::with_header(
    ///     vec!["x".into(), "x".into(), "user.name".into()],
    ///     vec!["first".into(), "second".into(), "Al".into()],
    /// );
    /// assert_eq!(
    ///     record.to_json().unwrap(),
    ///     br#"{"user":{"name":"Al"},"x":"first"}"#
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// [`EncodingError::PathConflict`] when one column name needs an object
    /// where another already placed a string, [`EncodingError::InvalidPath`]
    /// for names that are not valid paths.
    pub fn to_json(&self) -> Result<Vec<u8>, RecordError> {
        let mut document = JsonValue::Object(Map::new());

        for (i, name) in self.column_names().iter().enumerate().rev() {
            let Some(value) = self.values().get(i) else {
                trace!(column = %name, index = i, "skipping column past end of row");
                continue;
            };
            json_path::set_value(&mut document, name, value)?;
        }

        let bytes = serde_json::to_vec(&document).map_err(EncodingError::Json)?;
        Ok(bytes)
    }
}
