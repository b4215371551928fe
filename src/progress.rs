//! Progress reporting.
//!
//! A generation run pushes coarse `(percent, message)` updates to a
//! caller-supplied reporter. Reporting is fire-and-forget: implementations
//! must not block, and nothing they do can affect scheduling decisions.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A single progress update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// Completion percentage (0..=100).
    pub percent: u8,
    /// Short human-readable status.
    pub message: String,
}

/// One-way sink for progress updates.
pub trait ProgressReporter: Send + Sync {
    /// Records an update. Must return promptly.
    fn report(&self, percent: u8, message: &str);
}

impl<F> ProgressReporter for F
where
    F: Fn(u8, &str) + Send + Sync,
{
    fn report(&self, percent: u8, message: &str) {
        self(percent, message)
    }
}

/// Discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _percent: u8, _message: &str) {}
}

/// Emits updates as `tracing` events at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn report(&self, percent: u8, message: &str) {
        tracing::info!(percent, "{message}");
    }
}

/// Forwards updates over an unbounded channel.
///
/// Sending never waits on the receiver; updates sent after the receiver is
/// dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelProgress {
    tx: mpsc::UnboundedSender<ProgressUpdate>,
}

impl ChannelProgress {
    /// Creates a reporter and the receiving half.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProgressUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ProgressReporter for ChannelProgress {
    fn report(&self, percent: u8, message: &str) {
        let _ = self.tx.send(ProgressUpdate {
            percent: percent.min(100),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_closure_reporter() {
        let seen = Mutex::new(Vec::new());
        let reporter = |p: u8, m: &str| seen.lock().push((p, m.to_string()));
        reporter.report(10, "Clearing");
        reporter.report(100, "Done");
        assert_eq!(
            *seen.lock(),
            vec![(10, "Clearing".to_string()), (100, "Done".to_string())]
        );
    }

    #[test]
    fn test_channel_reporter() {
        let (reporter, mut rx) = ChannelProgress::channel();
        reporter.report(42, "Scheduled 1/2 sections...");
        reporter.report(200, "clamped");

        let first = rx.try_recv().unwrap();
        assert_eq!(first.percent, 42);
        assert_eq!(first.message, "Scheduled 1/2 sections...");
        assert_eq!(rx.try_recv().unwrap().percent, 100);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_reporter_after_receiver_dropped() {
        let (reporter, rx) = ChannelProgress::channel();
        drop(rx);
        reporter.report(50, "nobody listening");
    }

    #[test]
    fn test_no_progress() {
        NoProgress.report(0, "ignored");
        TracingProgress.report(0, "logged");
    }
}
