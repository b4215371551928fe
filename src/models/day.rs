//! Working day model.
//!
//! The timetable week is a fixed, ordered set of named days. Time slots are
//! day-independent, so a booking is always qualified by the day it falls on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A working day of the timetable week.
///
/// Declaration order is the preference order used when searching for
/// placements: earlier days are tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Day {
    /// The six working days, Monday through Saturday.
    pub const WORKING_WEEK: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Full day name (e.g. `"Monday"`).
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Three-letter abbreviation (e.g. `"Mon"`).
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown day name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day name: {0}")]
pub struct ParseDayError(pub String);

impl FromStr for Day {
    type Err = ParseDayError;

    /// Accepts full names and three-letter abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Day::WORKING_WEEK
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name) || d.short_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseDayError(s.to_string()))
    }
}
