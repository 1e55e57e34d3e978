/// Command-line arguments.
use clap::{Args, Parser, Subcommand, ValueEnum};
use disktally_core::analysis::FilterCriteria;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "disktally", version, about = "Disk usage analyser: inventory, filter and group files")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show disk usage for the volume holding a directory.
    DiskUsage(RootArg),
    /// Analyze a directory tree and list files matching every given filter.
    Filter(FilterArgs),
    /// Analyze a directory tree and list its files grouped by one key.
    Group(GroupArgs),
}

#[derive(Debug, Args)]
pub struct RootArg {
    /// Root directory for the analysis.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub root: RootArg,

    /// Keep files with this extension, including the dot (e.g. ".txt").
    #[arg(long)]
    pub extension: Option<String>,

    /// Keep files owned by this account.
    #[arg(long)]
    pub owner: Option<String>,

    /// Minimum file size in bytes.
    #[arg(long)]
    pub min_size: Option<u64>,

    /// Maximum file size in bytes.
    #[arg(long)]
    pub max_size: Option<u64>,

    /// Earliest modification date (DD.MM.YYYY or YYYY-MM-DD).
    #[arg(long)]
    pub since: Option<String>,

    /// Latest modification date (DD.MM.YYYY or YYYY-MM-DD).
    #[arg(long)]
    pub until: Option<String>,

    /// Keep files exactly this many directories below the root (1 = direct children).
    #[arg(long)]
    pub level: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            extension: self.extension.clone(),
            owner: self.owner.clone(),
            min_size: self.min_size,
            max_size: self.max_size,
            since: self.since.clone(),
            until: self.until.clone(),
            level: self.level,
        }
    }
}

#[derive(Debug, Args)]
pub struct GroupArgs {
    #[command(flatten)]
    pub root: RootArg,

    /// Key to group files by.
    #[arg(long, value_enum, ignore_case = true)]
    pub by: GroupKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupKey {
    Extension,
    Owner,
    Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}
