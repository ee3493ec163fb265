//! Error module
//!
//! Defines the error types returned by record access, record encoding and
//! the configuration/reader layers. All errors are returned to the caller;
//! nothing in this crate retries or swallows a failure.

use thiserror::Error;

/// The main error type for record operations.
///
/// # Error Categories
///
/// - **Field access**: a name that the record's name index does not know
/// - **Value rendering**: a scalar that has no CSV-safe string form
/// - **Encoding**: CSV or JSON serialization failures (see [`EncodingError`])
/// - **Configuration/input**: invalid reader/writer arguments and source I/O
///
/// # Example
///
/// ```
/// use csv_record::{Record, RecordError};
///
/// let record = Record::new();
/// let err = record.get("missing").unwrap_err();
/// assert!(matches!(err, RecordError::FieldNotFound(_)));
/// ```
#[derive(Error, Debug)]
pub enum RecordError {
    /// The requested column is absent from the record's name index.
    #[error("column {0} not found")]
    FieldNotFound(String),

    /// A scalar value could not be rendered as a CSV-safe string.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Serializing the record failed at the CSV writer or JSON path-set step.
    ///
    /// The record is left untouched, so the call can be retried once the
    /// inputs are fixed.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Reader or writer arguments failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgs(String),

    /// CSV error raised while reading a row source.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// General I/O error (opening sources, writing sinks).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error while loading configuration.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure inside one of the two record encoders.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// The CSV writer rejected a field.
    #[error("CSV write failed: {0}")]
    Csv(#[source] csv::Error),

    /// The in-memory byte buffer could not be flushed.
    #[error("write failed: {0}")]
    Io(#[source] std::io::Error),

    /// A JSON document could not be parsed or serialized.
    #[error("JSON failed: {0}")]
    Json(#[source] serde_json::Error),

    /// The key path cannot be used as a JSON path.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A segment of the key path already holds a non-object value.
    #[error("path '{path}' conflicts with non-object value at '{segment}'")]
    PathConflict { path: String, segment: String },
}
