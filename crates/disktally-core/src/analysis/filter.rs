/// Predicate filters over a collected record list.
///
/// [`RecordFilter`] owns a record list and narrows it one predicate at a
/// time; each call consumes the previous result and returns the next, so
/// filters compose by chaining. Filtering reuses the list's buffer.
/// [`FilterCriteria`] bundles the optional filters a frontend exposes and
/// applies them in a fixed order.
use crate::analysis::group::{group_runs, Group};
use crate::analysis::time_range::TimeRange;
use crate::error::FilterError;
use crate::model::FileRecord;
use compact_str::CompactString;

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    records: Vec<FileRecord>,
}

impl RecordFilter {
    pub fn new(records: Vec<FileRecord>) -> Self {
        Self { records }
    }

    /// Keep records whose extension is exactly `ext` (".txt" style, case-sensitive).
    pub fn by_extension(self, ext: &str) -> Self {
        self.retain(|r| r.extension() == ext)
    }

    /// Keep records owned by exactly `owner`.
    pub fn by_owner(self, owner: &str) -> Self {
        self.retain(|r| r.owner() == owner)
    }

    /// Keep records with `min <= size <= max`; each bound is optional.
    pub fn by_size(self, min: Option<u64>, max: Option<u64>) -> Self {
        if min.is_none() && max.is_none() {
            return self;
        }
        self.retain(|r| {
            min.map_or(true, |lo| r.size() >= lo) && max.map_or(true, |hi| r.size() <= hi)
        })
    }

    /// Keep records modified within `range`.
    pub fn by_time(self, range: &TimeRange) -> Self {
        if range.is_unbounded() {
            return self;
        }
        self.retain(|r| range.contains(r))
    }

    /// Keep records exactly `level` below the scan root.
    pub fn by_level(self, level: usize) -> Self {
        self.retain(|r| r.level() == level)
    }

    /// Sort by extension and split into runs of equal extension.
    pub fn group_by_extension(&mut self) -> Vec<Group<'_, CompactString>> {
        group_runs(&mut self.records, |r| &r.extension)
    }

    /// Sort by owner and split into runs of equal owner.
    pub fn group_by_owner(&mut self) -> Vec<Group<'_, CompactString>> {
        group_runs(&mut self.records, |r| &r.owner)
    }

    /// Sort by level and split into runs of equal level.
    pub fn group_by_level(&mut self) -> Vec<Group<'_, usize>> {
        group_runs(&mut self.records, |r| &r.level)
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }

    fn retain(mut self, keep: impl FnMut(&FileRecord) -> bool) -> Self {
        self.records.retain(keep);
        self
    }
}

impl From<Vec<FileRecord>> for RecordFilter {
    fn from(records: Vec<FileRecord>) -> Self {
        Self::new(records)
    }
}

/// Every optional filter a caller can ask for. `None` means "no filter".
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub extension: Option<String>,
    pub owner: Option<String>,
    pub min_size: Option<u64>,
    pub max_size: Option<u64>,
    /// Earliest modification date (DD.MM.YYYY or YYYY-MM-DD).
    pub since: Option<String>,
    /// Latest modification date (DD.MM.YYYY or YYYY-MM-DD).
    pub until: Option<String>,
    pub level: Option<usize>,
}

impl FilterCriteria {
    /// Parse the date bounds. Fails on the first malformed date.
    pub fn time_range(&self) -> Result<TimeRange, FilterError> {
        TimeRange::parse(self.since.as_deref(), self.until.as_deref())
    }

    /// Apply extension, owner, size, time and level filters in that order.
    ///
    /// Dates are parsed before any record is examined, so a malformed date
    /// fails without partial work.
    pub fn apply(&self, records: Vec<FileRecord>) -> Result<Vec<FileRecord>, FilterError> {
        let range = self.time_range()?;

        let mut filter = RecordFilter::new(records);
        if let Some(ext) = &self.extension {
            filter = filter.by_extension(ext);
        }
        if let Some(owner) = &self.owner {
            filter = filter.by_owner(owner);
        }
        filter = filter.by_size(self.min_size, self.max_size).by_time(&range);
        if let Some(level) = self.level {
            filter = filter.by_level(level);
        }
        Ok(filter.into_records())
    }
}
