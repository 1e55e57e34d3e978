/// Text rendering for the terminal: the progress line and reports.

pub mod progress_bar;
pub mod report;
