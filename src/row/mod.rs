//! Row module
//!
//! The [`Record`] type with its two encoders, plus the header-aware
//! [`RecordReader`] that produces records and the [`RecordWriter`] that
//! serializes them.

mod encode;
pub mod header;
pub mod reader;
pub mod record;
pub mod writer;

pub use header::{positional_names, NameIndex};
pub use reader::RecordReader;
pub use record::Record;
pub use writer::{RecordWriter, WriteStats};
