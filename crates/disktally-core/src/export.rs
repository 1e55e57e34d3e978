/// Machine-readable export of record lists (CSV and JSON).
use crate::error::ExportError;
use crate::model::FileRecord;
use serde::Serialize;
use std::io::Write;

/// Flat, serialisable view of one record.
#[derive(Debug, Serialize)]
pub struct RecordRow<'a> {
    pub path: String,
    pub size: u64,
    /// RFC 3339 local timestamp.
    pub modified: String,
    pub extension: &'a str,
    pub owner: &'a str,
    pub level: usize,
}

impl<'a> From<&'a FileRecord> for RecordRow<'a> {
    fn from(record: &'a FileRecord) -> Self {
        Self {
            path: record.path().to_string_lossy().into_owned(),
            size: record.size(),
            modified: record.modified().to_rfc3339(),
            extension: record.extension().as_str(),
            owner: record.owner().as_str(),
            level: record.level(),
        }
    }
}

/// Write `records` as CSV with a header row.
pub fn write_csv<W: Write>(records: &[FileRecord], writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in records {
        csv.serialize(RecordRow::from(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write `records` as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[FileRecord], mut writer: W) -> Result<(), ExportError> {
    let rows: Vec<RecordRow<'_>> = records.iter().map(RecordRow::from).collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writeln!(writer)?;
    Ok(())
}
