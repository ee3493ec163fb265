//! Scalar values carried by record fields.
//!
//! A [`Value`] crosses the record boundary in two directions only: it is
//! built from a raw field string ([`Value::from_string`]) when a field is
//! read, and rendered back to a CSV-safe string ([`Value::csv_string`]) when a
//! field is appended. Coercion between the variants is left to callers.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fmt;

use crate::error::RecordError;

/// A scalar field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value; renders as the empty string.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Raw bytes; only valid UTF-8 can be rendered.
    Bytes(Vec<u8>),
    /// Timestamp rendered as RFC 3339.
    Timestamp(DateTime<FixedOffset>),
}

impl Value {
    /// Builds a string value from a raw field.
    ///
    /// # Example
    ///
    /// ```
    /// use csv_record::Value;
    ///
    /// assert_eq!(Value::from_string("23.5"), Value::String("23.5".to_string()));
    /// ```
    pub fn from_string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Renders the value as the string stored in a CSV field.
    ///
    /// Quoting is not applied here; the CSV writer quotes on output.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidValue`] for byte values that are not
    /// valid UTF-8.
    pub fn csv_string(&self) -> Result<String, RecordError> {
        match self {
            Value::Null => Ok(String::new()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            Value::String(s) => Ok(s.clone()),
            Value::Bytes(bytes) => String::from_utf8(bytes.clone()).map_err(|e| {
                RecordError::InvalidValue(format!(
                    "bytes are not valid UTF-8 at offset {}",
                    e.utf8_error().valid_up_to()
                ))
            }),
            Value::Timestamp(ts) => Ok(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }

    /// Returns the inner string for [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            other => match other.csv_string() {
                Ok(s) => f.write_str(&s),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
