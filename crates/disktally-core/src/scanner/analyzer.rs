/// The analyzer: one root directory, one scan at a time.
///
/// Typical use from a frontend:
///
/// ```ignore
/// let mut analyzer = Analyzer::new(root);
/// analyzer.begin_scan()?;
/// while !analyzer.poll(POLL_INTERVAL)? {
///     draw(analyzer.current_progress());
/// }
/// let files = analyzer.collected_files()?;
/// ```
use crate::error::{ScanError, VolumeError};
use crate::model::FileRecord;
use crate::platform::{self, DiskUsage, OwnerResolver};
use crate::scanner::{start_scan, ScanEvent, ScanHandle};
use crossbeam_channel::RecvTimeoutError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

enum ScanState {
    Idle,
    Running(ScanHandle),
    Finished {
        files: Vec<FileRecord>,
        progress: f64,
    },
}

pub struct Analyzer {
    root: PathBuf,
    owners: Arc<dyn OwnerResolver>,
    state: ScanState,
}

impl Analyzer {
    /// Analyzer for `root` using the platform's owner resolver.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_owner_resolver(root, platform::default_owner_resolver())
    }

    pub fn with_owner_resolver(root: impl Into<PathBuf>, owners: Arc<dyn OwnerResolver>) -> Self {
        Self {
            root: root.into(),
            owners,
            state: ScanState::Idle,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Used and total bytes of the volume holding the root.
    ///
    /// Independent of any scan.
    pub fn disk_usage(&self) -> Result<DiskUsage, VolumeError> {
        platform::disk_usage(&self.root)
    }

    /// Start the background scan. Results of a previous finished scan are
    /// dropped.
    pub fn begin_scan(&mut self) -> Result<(), ScanError> {
        if matches!(self.state, ScanState::Running(_)) {
            return Err(ScanError::AlreadyRunning);
        }
        let handle = start_scan(self.root.clone(), self.owners.clone())?;
        self.state = ScanState::Running(handle);
        Ok(())
    }

    /// Completion percentage; 0 before any scan has started.
    pub fn current_progress(&self) -> f64 {
        match &self.state {
            ScanState::Idle => 0.0,
            ScanState::Running(handle) => handle.current_progress(),
            ScanState::Finished { progress, .. } => *progress,
        }
    }

    /// Wait up to `timeout` for the scan to finish.
    ///
    /// Returns `Ok(true)` once the records are available, `Ok(false)` if the
    /// scan is still running when the timeout expires. A failed scan returns
    /// its error and leaves the analyzer idle.
    pub fn poll(&mut self, timeout: Duration) -> Result<bool, ScanError> {
        let handle = match &self.state {
            ScanState::Idle => return Err(ScanError::NotStarted),
            ScanState::Finished { .. } => return Ok(true),
            ScanState::Running(handle) => handle,
        };

        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match handle.events.recv_timeout(remaining) {
                Ok(ScanEvent::Counted { total }) => {
                    debug!("Scanner counted {total} files");
                }
                Ok(ScanEvent::Complete { files, duration }) => {
                    debug!("Collected {} records in {duration:?}", files.len());
                    let progress = handle.current_progress();
                    self.state = ScanState::Finished { files, progress };
                    return Ok(true);
                }
                Ok(ScanEvent::Failed(err)) => {
                    self.state = ScanState::Idle;
                    return Err(err);
                }
                Err(RecvTimeoutError::Timeout) => return Ok(false),
                Err(RecvTimeoutError::Disconnected) => {
                    self.state = ScanState::Idle;
                    return Err(ScanError::WorkerLost);
                }
            }
        }
    }

    /// Block until the scan finishes.
    pub fn wait(&mut self) -> Result<(), ScanError> {
        while !self.poll(Duration::from_secs(1))? {}
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, ScanState::Finished { .. })
    }

    /// Records from the finished scan, in discovery order.
    pub fn collected_files(&self) -> Result<&[FileRecord], ScanError> {
        match &self.state {
            ScanState::Finished { files, .. } => Ok(files),
            ScanState::Running(_) => Err(ScanError::NotFinished),
            ScanState::Idle => Err(ScanError::NotStarted),
        }
    }

    /// Take ownership of the records from the finished scan.
    pub fn into_files(self) -> Result<Vec<FileRecord>, ScanError> {
        match self.state {
            ScanState::Finished { files, .. } => Ok(files),
            ScanState::Running(_) => Err(ScanError::NotFinished),
            ScanState::Idle => Err(ScanError::NotStarted),
        }
    }
}
