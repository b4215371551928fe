//! Error types and the generation outcome contract.

use serde::Serialize;
use thiserror::Error;

use crate::scheduler::ScheduleReport;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Errors raised by a placement store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding of stored placements failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-reported failure, surfaced verbatim.
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Errors that fail a timetable generation run.
///
/// Under-scheduled sections are not errors; only store I/O and
/// configuration problems are.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// Clearing the previous timetable failed.
    #[error("Failed to clear timetable: {0}")]
    Clear(#[source] StoreError),

    /// The bulk insert failed. The previous timetable is already gone.
    #[error("Failed to save timetable: {0}")]
    Insert(#[source] StoreError),

    /// Invalid engine configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TimetableError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Caller-facing result of a generation run.
///
/// `success`/`error` is the minimal contract; `report` carries the
/// per-section breakdown when the run succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    /// Whether the run completed and the timetable was stored.
    pub success: bool,
    /// Failure reason when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Structured scheduling report (successful runs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ScheduleReport>,
}

impl GenerationOutcome {
    /// Drops the structured report, keeping only `{ success, error }`.
    pub fn without_report(mut self) -> Self {
        self.report = None;
        self
    }
}

impl From<Result<ScheduleReport>> for GenerationOutcome {
    fn from(result: Result<ScheduleReport>) -> Self {
        match result {
            Ok(report) => Self {
                success: true,
                error: None,
                report: Some(report),
            },
            Err(e) => Self {
                success: false,
                error: Some(e.to_string()),
                report: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_verbatim() {
        let e = StoreError::backend("connection reset");
        assert_eq!(e.to_string(), "connection reset");
    }

    #[test]
    fn test_timetable_error_display() {
        let e = TimetableError::Insert(StoreError::backend("duplicate key"));
        assert_eq!(e.to_string(), "Failed to save timetable: duplicate key");

        let e = TimetableError::Clear(StoreError::backend("timeout"));
        assert_eq!(e.to_string(), "Failed to clear timetable: timeout");
    }

    #[test]
    fn test_outcome_from_error() {
        let outcome = GenerationOutcome::from(Err(TimetableError::Insert(StoreError::backend(
            "disk full",
        ))));
        assert!(!outcome.success);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Failed to save timetable: disk full")
        );
        assert!(outcome.report.is_none());

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("report").is_none());
    }

    #[test]
    fn test_outcome_from_report() {
        let outcome = GenerationOutcome::from(Ok(ScheduleReport::default()));
        assert!(outcome.success);
        assert!(outcome.error.is_none());
        assert!(outcome.report.is_some());

        let minimal = outcome.without_report();
        let json = serde_json::to_value(&minimal).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }
}
