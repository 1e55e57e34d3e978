/// Aggregate totals over a record list.
use crate::model::FileRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordSummary {
    pub file_count: u64,
    pub total_size: u64,
}

impl RecordSummary {
    pub fn of(records: &[FileRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            file_count: acc.file_count + 1,
            total_size: acc.total_size + r.size(),
        })
    }
}
