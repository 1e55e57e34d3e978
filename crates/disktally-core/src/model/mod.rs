/// Data model: per-file records and size formatting helpers.
pub mod file_record;
pub mod size;

pub use file_record::{extension_of, level_of, FileRecord, OWNER_NOT_APPLICABLE};
