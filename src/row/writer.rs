use std::io::Write;
use tracing::debug;

use super::record::Record;
use crate::args::{OutputFormat, WriterArgs};
use crate::error::RecordError;

/// Statistics collected while writing records.
///
/// # Example
///
/// ```
/// use csv_record::WriteStats;
///
/// let stats = WriteStats::default();
/// assert_eq!(stats.total_records, 0);
/// assert_eq!(stats.bytes_written, 0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteStats {
    /// Number of records written.
    pub total_records: u64,
    /// Bytes written, record delimiters included.
    pub bytes_written: u64,
}

/// Writes records to a sink, one encoded record per line.
///
/// Each record is encoded with [`Record::to_delimited_text`] or
/// [`Record::to_json`] depending on [`WriterArgs::output_format`], then
/// followed by the configured record delimiter.
pub struct RecordWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    field_delimiter: u8,
    record_delimiter: Vec<u8>,
    stats: WriteStats,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a writer over `writer` after validating `args`.
    pub fn new(writer: W, args: &WriterArgs) -> Result<Self, RecordError> {
        args.validate()?;

        Ok(Self {
            writer,
            format: args.output_format,
            field_delimiter: args.field_delimiter_byte()?,
            record_delimiter: args.record_delimiter.as_bytes().to_vec(),
            stats: WriteStats::default(),
        })
    }

    /// Encodes and writes one record.
    ///
    /// Nothing is written when encoding fails.
    ///
    /// In CSV format a record with no values, or a single empty value, is
    /// written as a blank line. CSV readers (including [`crate::RecordReader`])
    /// skip blank lines, so such a row is not read back.
    pub fn write(&mut self, record: &Record) -> Result<(), RecordError> {
        let encoded = match self.format {
            OutputFormat::Csv => record.to_delimited_text(self.field_delimiter)?,
            OutputFormat::Json => record.to_json()?,
        };

        self.writer.write_all(&encoded)?;
        self.writer.write_all(&self.record_delimiter)?;

        self.stats.total_records += 1;
        self.stats.bytes_written += (encoded.len() + self.record_delimiter.len()) as u64;
        Ok(())
    }

    /// Flushes pending writes.
    pub fn flush(&mut self) -> Result<(), RecordError> {
        self.writer.flush()?;
        debug!(
            records = self.stats.total_records,
            bytes = self.stats.bytes_written,
            "flushed record writer"
        );
        Ok(())
    }

    /// Returns a reference to the current write statistics.
    pub fn stats(&self) -> &WriteStats {
        &self.stats
    }

    /// Returns the underlying sink. Call [`RecordWriter::flush`] first for buffered sinks.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
