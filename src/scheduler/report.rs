//! Scheduling run report.
//!
//! Summarizes how each section fared: how many contact hours it needed,
//! how many were placed, and why any were left unplaced. Under-scheduling
//! is an accepted outcome of the greedy search, so it is reported here
//! rather than raised as an error.
//!
//! | Status | Meaning |
//! |--------|---------|
//! | Complete | All required hours placed |
//! | Partial | Some hours placed, search space exhausted |
//! | Unscheduled | Rooms fit, but no free cell was found |
//! | NoEligibleRoom | No room can seat the headcount |
//! | MissingCourse | No course data, section skipped |
//! | NoHoursRequired | Course requires zero hours |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placement outcome of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionStatus {
    /// All required hours were placed.
    Complete,
    /// Some, but not all, required hours were placed.
    Partial,
    /// Eligible rooms existed but every candidate cell was taken.
    Unscheduled,
    /// No room has sufficient capacity.
    NoEligibleRoom,
    /// The section has no course data.
    MissingCourse,
    /// The course requires no contact hours.
    NoHoursRequired,
}

impl SectionStatus {
    /// Whether the section still needs hours.
    pub fn is_short(self) -> bool {
        matches!(
            self,
            SectionStatus::Partial | SectionStatus::Unscheduled | SectionStatus::NoEligibleRoom
        )
    }
}

/// Per-section outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOutcome {
    /// Section ID.
    pub section_id: String,
    /// Required weekly contact hours.
    pub required_hours: u32,
    /// Hours actually placed.
    pub scheduled_hours: u32,
    /// Outcome classification.
    pub status: SectionStatus,
}

impl SectionOutcome {
    /// Creates an outcome.
    pub fn new(
        section_id: impl Into<String>,
        required_hours: u32,
        scheduled_hours: u32,
        status: SectionStatus,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            required_hours,
            scheduled_hours,
            status,
        }
    }

    /// Classifies a search that ran to completion or exhaustion.
    pub fn from_search(section_id: impl Into<String>, required: u32, scheduled: u32) -> Self {
        let status = if scheduled >= required {
            SectionStatus::Complete
        } else if scheduled == 0 {
            SectionStatus::Unscheduled
        } else {
            SectionStatus::Partial
        };
        Self::new(section_id, required, scheduled, status)
    }

    /// Hours still missing.
    pub fn shortfall(&self) -> u32 {
        self.required_hours.saturating_sub(self.scheduled_hours)
    }
}

/// Result summary of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Total placements produced.
    pub placement_count: usize,
    /// Sum of required hours over sections with course data.
    pub required_hours: u32,
    /// Section outcomes, in processing (priority) order.
    pub sections: Vec<SectionOutcome>,
    /// Booked fraction of each room's day x slot cells (0.0..1.0).
    ///
    /// Keyed by room ID; IDs are assumed unique (see `validate_input`).
    pub room_utilization: HashMap<String, f64>,
}

impl ScheduleReport {
    /// Records a section outcome.
    pub fn add_section(&mut self, outcome: SectionOutcome) {
        self.required_hours = self.required_hours.saturating_add(outcome.required_hours);
        self.placement_count += outcome.scheduled_hours as usize;
        self.sections.push(outcome);
    }

    /// Outcome for a section.
    pub fn section(&self, section_id: &str) -> Option<&SectionOutcome> {
        self.sections.iter().find(|s| s.section_id == section_id)
    }

    /// Sections that did not receive all their hours.
    pub fn unscheduled_sections(&self) -> Vec<&SectionOutcome> {
        self.sections.iter().filter(|s| s.status.is_short()).collect()
    }

    /// Sections skipped for missing course data.
    pub fn skipped_sections(&self) -> Vec<&SectionOutcome> {
        self.sections
            .iter()
            .filter(|s| s.status == SectionStatus::MissingCourse)
            .collect()
    }

    /// Total hours left unplaced.
    pub fn shortfall_hours(&self) -> u32 {
        self.sections.iter().map(SectionOutcome::shortfall).sum()
    }

    /// Whether every required hour was placed.
    pub fn is_complete(&self) -> bool {
        self.shortfall_hours() == 0
    }

    /// Mean utilization across rooms (0.0 with no rooms).
    pub fn avg_room_utilization(&self) -> f64 {
        if self.room_utilization.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.room_utilization.values().sum();
        sum / self.room_utilization.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_search() {
        assert_eq!(
            SectionOutcome::from_search("S1", 3, 3).status,
            SectionStatus::Complete
        );
        assert_eq!(
            SectionOutcome::from_search("S1", 3, 1).status,
            SectionStatus::Partial
        );
        assert_eq!(
            SectionOutcome::from_search("S1", 3, 0).status,
            SectionStatus::Unscheduled
        );
    }

    #[test]
    fn test_report_aggregates() {
        let mut r = ScheduleReport::default();
        r.add_section(SectionOutcome::from_search("S1", 3, 3));
        r.add_section(SectionOutcome::from_search("S2", 2, 1));
        r.add_section(SectionOutcome::new("S3", 4, 0, SectionStatus::NoEligibleRoom));
        r.add_section(SectionOutcome::new("S4", 0, 0, SectionStatus::MissingCourse));

        assert_eq!(r.placement_count, 4);
        assert_eq!(r.required_hours, 9);
        assert_eq!(r.shortfall_hours(), 5);
        assert!(!r.is_complete());

        let short: Vec<&str> = r
            .unscheduled_sections()
            .iter()
            .map(|s| s.section_id.as_str())
            .collect();
        assert_eq!(short, vec!["S2", "S3"]);
        assert_eq!(r.skipped_sections().len(), 1);
        assert_eq!(r.section("S2").unwrap().shortfall(), 1);
        assert!(r.section("S99").is_none());
    }

    #[test]
    fn test_empty_report() {
        let r = ScheduleReport::default();
        assert!(r.is_complete());
        assert_eq!(r.shortfall_hours(), 0);
        assert!((r.avg_room_utilization() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_avg_room_utilization() {
        let mut r = ScheduleReport::default();
        r.room_utilization.insert("R1".into(), 1.0);
        r.room_utilization.insert("R2".into(), 0.5);
        assert!((r.avg_room_utilization() - 0.75).abs() < 1e-10);
    }
}
