use csv::{Reader, ReaderBuilder, StringRecord};
use std::io::Read;
use std::sync::Arc;
use tracing::debug;

use super::header::{positional_names, NameIndex};
use super::record::Record;
use crate::args::{FileHeaderInfo, ReaderArgs};
use crate::error::RecordError;

/// Header-aware source of [`Record`]s.
///
/// Column names are resolved once, from the header line or positionally
/// (`_1.._n`) depending on [`ReaderArgs::file_header_info`]. Every record
/// produced by one reader shares the same [`NameIndex`].
///
/// Rows may be shorter or longer than the header: short rows read their
/// missing columns as empty strings, extra fields are kept positionally.
///
/// # Example
///
/// ```
/// use csv_record::{FileHeaderInfo, ReaderArgs, RecordReader};
///
/// let args = ReaderArgs {
///     file_header_info: FileHeaderInfo::Use,
///     ..ReaderArgs::default()
/// };
/// let data = "id,name\n7,Al\n";
/// let mut reader = RecordReader::new(data.as_bytes(), &args).unwrap();
/// let record = reader.read_next().unwrap().unwrap();
/// assert_eq!(record.to_json().unwrap(), br#"{"name":"Al","id":"7"}"#);
/// ```
pub struct RecordReader<R> {
    /// The underlying CSV reader.
    reader: Reader<R>,
    /// Column names handed to every record.
    column_names: Vec<String>,
    /// Index shared by every record.
    name_index: Arc<NameIndex>,
    /// Reused row buffer.
    row: StringRecord,
}

impl<R: Read> RecordReader<R> {
    /// Creates a reader over `source`, consuming the header line if there is one.
    pub fn new(source: R, args: &ReaderArgs) -> Result<Self, RecordError> {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(args.field_delimiter_byte()?)
            .quote(args.quote_character_byte()?)
            .comment(args.comment_character_byte()?)
            .has_headers(args.file_header_info != FileHeaderInfo::None)
            .flexible(true);

        let mut reader = builder.from_reader(source);

        // Without a header the csv reader reports the first row here and
        // still yields it as data.
        let header = reader.headers()?;
        let column_names = match args.file_header_info {
            FileHeaderInfo::Use => header.iter().map(str::to_string).collect(),
            FileHeaderInfo::Ignore | FileHeaderInfo::None => positional_names(header.len()),
        };

        debug!(
            header_info = ?args.file_header_info,
            columns = column_names.len(),
            "resolved column names"
        );

        let name_index = Arc::new(NameIndex::from_names(column_names.iter().cloned()));

        Ok(Self {
            reader,
            column_names,
            name_index,
            row: StringRecord::new(),
        })
    }

    /// Reads the next row as a record, or `None` at end of input.
    pub fn read_next(&mut self) -> Option<Result<Record, RecordError>> {
        match self.reader.read_record(&mut self.row) {
            Ok(true) => Some(Ok(Record::from_parts(
                self.column_names.clone(),
                self.row.iter().map(str::to_string).collect(),
                Arc::clone(&self.name_index),
            ))),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }

    /// Column names resolved from the header, handed to every record.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// The name index shared by every record this reader produces.
    pub fn name_index(&self) -> &Arc<NameIndex> {
        &self.name_index
    }

    /// Line number the reader has advanced to (1-indexed).
    pub fn current_line(&self) -> u64 {
        self.reader.position().line()
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next()
    }
}
