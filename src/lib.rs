//! CSV Record Library
//!
//! Represents one delimited-text row as a name-addressable [`Record`] and
//! re-encodes it as a delimited-text line or a JSON object. It includes
//! modules for the scalar [`Value`] type, dotted-path JSON assignment,
//! reader/writer arguments, and header-aware record sources and sinks.
//!
//! # Example
//!
//! ```
//! use csv_record::{FileHeaderInfo, ReaderArgs, RecordReader, Value};
//!
//! let args = ReaderArgs {
//!     file_header_info: FileHeaderInfo::Use,
//!     ..ReaderArgs::default()
//! };
//! let mut reader = RecordReader::new("user.name,age\nAl,42\n".as_bytes(), &args).unwrap();
//! let mut record = reader.read_next().unwrap().unwrap();
//!
//! record.set("active", &Value::Bool(true)).unwrap();
//! assert_eq!(record.to_delimited_text(b',').unwrap(), b"Al,42,true");
//! assert_eq!(
//!     record.to_json().unwrap(),
//!     br#"{"active":"true","age":"42","user":{"name":"Al"}}"#
//! );
//! ```

pub mod args;
pub mod error;
pub mod json_path;
pub mod row;
pub mod value;

pub use args::{FileHeaderInfo, OutputFormat, ReaderArgs, WriterArgs};
pub use error::{EncodingError, RecordError};
pub use row::{NameIndex, Record, RecordReader, RecordWriter, WriteStats};
pub use value::Value;
