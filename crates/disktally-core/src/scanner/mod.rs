/// Scanner module: runs the two-pass walk off the calling thread.
///
/// [`start_scan`] spawns one scanner thread which counts the files under the
/// root, publishes a [`ProgressTracker`] with that fixed total, then collects
/// a [`FileRecord`](crate::model::FileRecord) per file. The caller polls
/// [`ScanHandle::current_progress`] for display and receives the outcome as
/// a [`ScanEvent`] on `events`.
///
/// The walk itself is serial; only the poller is decoupled from it.
pub mod analyzer;
pub mod progress;
pub mod walk;

pub use analyzer::Analyzer;
pub use progress::{ProgressTracker, ScanEvent};

use crate::error::ScanError;
use crate::platform::OwnerResolver;
use crossbeam_channel::Receiver;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// Maximum number of lifecycle events that may queue up in the channel.
///
/// A scan sends at most two events, so the scanner never blocks on send.
pub const EVENT_CHANNEL_CAPACITY: usize = 4;

/// Tracker slot shared with the scanner thread. Empty until counting ends.
type SharedTracker = Arc<OnceLock<ProgressTracker>>;

/// Handle to a running or finished scan.
pub struct ScanHandle {
    /// Receiver for lifecycle events from the scan thread.
    pub events: Receiver<ScanEvent>,
    tracker: SharedTracker,
    thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Live completion percentage.
    ///
    /// 0 while files are still being counted. A tree with no files has
    /// nothing to collect and reads as 100.
    pub fn current_progress(&self) -> f64 {
        match self.tracker.get() {
            None => 0.0,
            Some(tracker) => tracker.percent().unwrap_or(100.0),
        }
    }

    /// The tracker, once the counting pass has fixed its total.
    pub fn tracker(&self) -> Option<&ProgressTracker> {
        self.tracker.get()
    }

    /// Wait for the scanner thread to exit.
    pub fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("scanner thread panicked");
            }
        }
    }
}

impl Drop for ScanHandle {
    fn drop(&mut self) {
        self.join();
    }
}

/// Start a new scan of `root` on a background thread.
pub fn start_scan(
    root: PathBuf,
    owners: Arc<dyn OwnerResolver>,
) -> Result<ScanHandle, ScanError> {
    let (event_tx, events) = crossbeam_channel::bounded::<ScanEvent>(EVENT_CHANNEL_CAPACITY);
    let tracker: SharedTracker = Arc::new(OnceLock::new());
    let tracker_slot = tracker.clone();

    let thread = thread::Builder::new()
        .name("disktally-scanner".into())
        .spawn(move || {
            info!("Starting scan of {}", root.display());
            let start = Instant::now();

            let outcome = walk::validate_root(&root)
                .and_then(|()| walk::count_files(&root))
                .and_then(|total| {
                    let tracker = tracker_slot.get_or_init(|| ProgressTracker::new(total));
                    let _ = event_tx.send(ScanEvent::Counted { total });
                    walk::collect_files(&root, owners.as_ref(), tracker)
                });

            let event = match outcome {
                Ok(files) => {
                    let duration = start.elapsed();
                    info!("Scan complete: {} files in {duration:?}", files.len());
                    ScanEvent::Complete { files, duration }
                }
                Err(err) => {
                    info!("Scan of {} failed: {err}", root.display());
                    ScanEvent::Failed(err)
                }
            };
            // The receiver may already be gone if the caller gave up.
            let _ = event_tx.send(event);
        })
        .map_err(ScanError::Spawn)?;

    Ok(ScanHandle {
        events,
        tracker,
        thread: Some(thread),
    })
}
