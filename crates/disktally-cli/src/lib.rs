/// DiskTally CLI: terminal frontend.
///
/// This crate contains argument parsing, the progress-polling loop and
/// text rendering. Business logic lives in `disktally-core`.
pub mod args;
pub mod commands;
pub mod render;

pub use args::{Cli, Command};
pub use commands::run;
