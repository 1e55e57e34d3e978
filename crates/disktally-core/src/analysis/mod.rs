/// Analysis over collected records: filters, grouping, totals.

pub mod filter;
pub mod group;
pub mod summary;
pub mod time_range;

pub use filter::{FilterCriteria, RecordFilter};
pub use group::Group;
pub use summary::RecordSummary;
pub use time_range::{parse_date, TimeRange};
