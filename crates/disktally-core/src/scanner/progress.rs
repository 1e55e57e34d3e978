/// Scan progress reporting.
///
/// The scanner thread advances a [`ProgressTracker`] once per collected file;
/// the caller reads it whenever it redraws. Lifecycle messages (counted,
/// complete, failed) travel separately over a crossbeam channel as
/// [`ScanEvent`]s.
use crate::error::{ProgressError, ScanError};
use crate::model::FileRecord;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Completion counter against a total fixed at construction.
///
/// `completed` only ever grows. It may pass `total` if files appear after
/// the counting pass; the percentage is not clamped.
#[derive(Debug)]
pub struct ProgressTracker {
    total: u64,
    completed: AtomicU64,
}

impl ProgressTracker {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            completed: AtomicU64::new(0),
        }
    }

    /// Record `step` more completed items.
    pub fn update(&self, step: u64) {
        self.completed.fetch_add(step, Ordering::Relaxed);
    }

    /// Record one completed item.
    #[inline]
    pub fn advance(&self) {
        self.update(1);
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// `completed / total * 100`, unclamped.
    pub fn percent(&self) -> Result<f64, ProgressError> {
        if self.total == 0 {
            return Err(ProgressError::EmptyTotal);
        }
        Ok(self.completed() as f64 / self.total as f64 * 100.0)
    }
}

/// Lifecycle messages sent from the scan thread.
#[derive(Debug)]
pub enum ScanEvent {
    /// The counting pass finished; the tracker now has its fixed total.
    Counted { total: u64 },
    /// The collecting pass finished. Records are in discovery order.
    Complete {
        files: Vec<FileRecord>,
        duration: Duration,
    },
    /// The scan stopped on an error. Nothing collected so far is kept.
    Failed(ScanError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let tracker = ProgressTracker::new(100);
        assert_eq!(tracker.percent(), Ok(0.0));
        assert_eq!(tracker.completed(), 0);
    }

    #[test]
    fn updates_accumulate() {
        let tracker = ProgressTracker::new(100);
        tracker.update(25);
        assert_eq!(tracker.percent(), Ok(25.0));
        tracker.update(25);
        assert_eq!(tracker.percent(), Ok(50.0));
    }

    #[test]
    fn advance_is_single_step() {
        let tracker = ProgressTracker::new(4);
        tracker.advance();
        tracker.advance();
        tracker.advance();
        assert_eq!(tracker.completed(), 3);
        assert_eq!(tracker.percent(), Ok(75.0));
    }

    #[test]
    fn progress_is_not_clamped() {
        let tracker = ProgressTracker::new(100);
        tracker.update(150);
        assert_eq!(tracker.percent(), Ok(150.0));
    }

    #[test]
    fn zero_total_is_an_error() {
        let tracker = ProgressTracker::new(0);
        assert_eq!(tracker.percent(), Err(ProgressError::EmptyTotal));
        // Updating is still allowed; reading stays an error.
        tracker.advance();
        assert_eq!(tracker.percent(), Err(ProgressError::EmptyTotal));
    }

    #[test]
    fn readable_from_another_thread() {
        let tracker = std::sync::Arc::new(ProgressTracker::new(1_000));
        let writer = {
            let tracker = tracker.clone();
            std::thread::spawn(move || {
                for _ in 0..1_000 {
                    tracker.advance();
                }
            })
        };
        writer.join().unwrap();
        assert_eq!(tracker.percent(), Ok(100.0));
    }
}
