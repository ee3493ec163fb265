//! Reader and writer arguments.
//!
//! Both argument sets can be built in code or parsed from JSON text or any
//! reader over JSON:
//!
//! ```json
//! {
//!     "file_header_info": "USE",
//!     "field_delimiter": ";",
//!     "quote_character": "\"",
//!     "comment_character": "#"
//! }
//! ```
//!
//! Missing keys take their defaults. Delimiters, quote and comment
//! characters must each be exactly one ASCII character.

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::RecordError;

/// How the first line of a source is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileHeaderInfo {
    /// The first line names the columns.
    Use,
    /// The first line is a header but its names are discarded; columns are `_1.._n`.
    Ignore,
    /// There is no header line; columns are `_1.._n`.
    #[default]
    None,
}

/// Encoding used by [`crate::RecordWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Arguments for [`crate::RecordReader`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderArgs {
    pub file_header_info: FileHeaderInfo,
    pub field_delimiter: String,
    pub quote_character: String,
    pub comment_character: Option<String>,
}

impl Default for ReaderArgs {
    fn default() -> Self {
        Self {
            file_header_info: FileHeaderInfo::default(),
            field_delimiter: ",".to_string(),
            quote_character: "\"".to_string(),
            comment_character: None,
        }
    }
}

impl ReaderArgs {
    /// Checks that every character argument is a single ASCII character.
    pub fn validate(&self) -> Result<(), RecordError> {
        self.field_delimiter_byte()?;
        self.quote_character_byte()?;
        self.comment_character_byte()?;
        Ok(())
    }

    /// The field delimiter as the single byte the csv reader takes.
    pub fn field_delimiter_byte(&self) -> Result<u8, RecordError> {
        single_ascii("field_delimiter", &self.field_delimiter)
    }

    pub fn quote_character_byte(&self) -> Result<u8, RecordError> {
        single_ascii("quote_character", &self.quote_character)
    }

    pub fn comment_character_byte(&self) -> Result<Option<u8>, RecordError> {
        self.comment_character
            .as_deref()
            .map(|c| single_ascii("comment_character", c))
            .transpose()
    }

    /// Parses and validates arguments from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, RecordError> {
        let args: Self = serde_json::from_str(json)?;
        args.validate()?;
        Ok(args)
    }

    /// Parses and validates arguments from a JSON reader, such as an open file.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RecordError> {
        let args: Self = serde_json::from_reader(reader)?;
        args.validate()?;
        Ok(args)
    }
}

/// Arguments for [`crate::RecordWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterArgs {
    pub output_format: OutputFormat,
    pub field_delimiter: String,
    /// `"\n"` or `"\r\n"`.
    pub record_delimiter: String,
}

impl Default for WriterArgs {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            field_delimiter: ",".to_string(),
            record_delimiter: "\n".to_string(),
        }
    }
}

impl WriterArgs {
    /// Checks the field delimiter and that the record delimiter is `\n` or `\r\n`.
    pub fn validate(&self) -> Result<(), RecordError> {
        self.field_delimiter_byte()?;
        if self.record_delimiter != "\n" && self.record_delimiter != "\r\n" {
            return Err(RecordError::InvalidArgs(format!(
                "record_delimiter must be \"\\n\" or \"\\r\\n\", got {:?}",
                self.record_delimiter
            )));
        }
        Ok(())
    }

    pub fn field_delimiter_byte(&self) -> Result<u8, RecordError> {
        single_ascii("field_delimiter", &self.field_delimiter)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RecordError> {
        let args: Self = serde_json::from_str(json)?;
        args.validate()?;
        Ok(args)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RecordError> {
        let args: Self = serde_json::from_reader(reader)?;
        args.validate()?;
        Ok(args)
    }
}

fn single_ascii(name: &str, value: &str) -> Result<u8, RecordError> {
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(RecordError::InvalidArgs(format!(
            "{} must be a single ASCII character, got {:?}",
            name, value
        ))),
    }
}
