/// Modification-time bounds for the time filter.
///
/// Bounds are calendar dates taken as local midnight. Records are compared
/// at full timestamp precision, so a file modified at 09:00 on the
/// `until` date falls outside the range.
use crate::error::FilterError;
use crate::model::FileRecord;
use chrono::{NaiveDate, NaiveDateTime};

/// Accepted date layouts, tried in order.
const DATE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub min: Option<NaiveDateTime>,
    pub max: Option<NaiveDateTime>,
}

impl TimeRange {
    /// Parse optional `min`/`max` date strings. Either may be absent.
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Result<Self, FilterError> {
        Ok(Self {
            min: min.map(parse_date).transpose()?,
            max: max.map(parse_date).transpose()?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether the record's local modification time lies in `[min, max]`.
    pub fn contains(&self, record: &FileRecord) -> bool {
        let mtime = record.modified().naive_local();
        self.min.map_or(true, |min| mtime >= min) && self.max.map_or(true, |max| mtime <= max)
    }
}

/// Parse a calendar date into local midnight of that day.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, FilterError> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .ok_or_else(|| FilterError::InvalidDate {
            input: input.to_string(),
        })
}
