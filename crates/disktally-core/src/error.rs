/// Error types for the core crate.
///
/// Filesystem failures are never suppressed: every error carries the path it
/// happened on and is handed straight back to the caller.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while starting, running, or reading back a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root could not be inspected (usually not-found or access-denied).
    #[error("cannot access scan root '{}': {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scan root '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The directory walker could not read an entry or a directory.
    #[error("failed to walk '{}': {source}", display_optional(.path))]
    Walk {
        path: Option<PathBuf>,
        #[source]
        source: jwalk::Error,
    },

    #[error("cannot read metadata for '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn scanner thread: {0}")]
    Spawn(#[source] io::Error),

    /// The scanner thread went away without reporting a result.
    #[error("scanner thread exited without reporting a result")]
    WorkerLost,

    #[error("no scan has been started")]
    NotStarted,

    #[error("a scan is already running")]
    AlreadyRunning,

    #[error("the scan has not finished yet")]
    NotFinished,
}

impl From<jwalk::Error> for ScanError {
    fn from(source: jwalk::Error) -> Self {
        Self::Walk {
            path: source.path().map(|p| p.to_path_buf()),
            source,
        }
    }
}

fn display_optional(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".into())
}

/// Failure of a volume capacity query.
#[derive(Debug, Error)]
#[error("cannot query disk usage for '{}': {source}", .path.display())]
pub struct VolumeError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    /// Percentages are meaningless against a total of zero files.
    #[error("progress total is zero; nothing to scan")]
    EmptyTotal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid date '{input}': expected DD.MM.YYYY or YYYY-MM-DD")]
    InvalidDate { input: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}
