//! Time slot model.
//!
//! A time slot is a day-independent interval [start, end) that repeats
//! identically on every working day. The slot catalog is expected in
//! ascending start-time order; the scheduler walks it as given.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A recurring weekly time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Start time of day (inclusive).
    pub start: NaiveTime,
    /// End time of day (exclusive).
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(id: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Parses `HH:MM` or `HH:MM:SS` start/end strings.
    pub fn parse(
        id: impl Into<String>,
        start: &str,
        end: &str,
    ) -> Result<Self, chrono::ParseError> {
        Ok(Self::new(id, parse_time(start)?, parse_time(end)?))
    }

    /// Duration in minutes. Zero or negative for malformed slots.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether start precedes end.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Whether two slots overlap in time of day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Sorts a slot catalog by start time (stable).
    pub fn sort_catalog(slots: &mut [TimeSlot]) {
        slots.sort_by_key(|s| s.start);
    }

    /// Whether a slot catalog is in ascending start-time order.
    pub fn is_sorted_catalog(slots: &[TimeSlot]) -> bool {
        slots.windows(2).all(|w| w[0].start <= w[1].start)
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
}
