/// DiskTally Core: scanning, filtering, and grouping of file inventories.
///
/// This crate contains all business logic with zero UI dependencies.
/// Frontends start a scan through [`scanner::Analyzer`], poll its progress,
/// and hand the collected records to [`analysis::RecordFilter`].
///
/// # Modules
///
/// - [`model`]: Per-file records and size formatting.
/// - [`scanner`]: Background two-pass directory walk with progress reporting.
/// - [`analysis`]: Filters, sort-then-group views, totals.
/// - [`platform`]: Owner resolution and volume capacity queries.
/// - [`export`]: CSV and JSON output of record lists.
pub mod analysis;
pub mod error;
pub mod export;
pub mod model;
pub mod platform;
pub mod scanner;

pub use error::{ExportError, FilterError, ProgressError, ScanError, VolumeError};
