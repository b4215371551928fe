//! Engine configuration.
//!
//! The working-day sequence and the progress interpolation band are
//! configuration rather than derived data. Every field has a default, so
//! partial JSON documents are accepted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, TimetableError};
use crate::models::Day;

/// Progress percentage checkpoints used by a generation run.
pub(crate) mod checkpoint {
    pub const INITIALIZING: u8 = 0;
    pub const CLEARING: u8 = 10;
    pub const SAVING: u8 = 85;
    pub const COMPLETE: u8 = 100;
}

/// Percent band over which per-section progress is interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBounds {
    /// Percent reported before the first section.
    pub lower: u8,
    /// Percent reported after the last section.
    pub upper: u8,
}

impl Default for ProgressBounds {
    fn default() -> Self {
        Self {
            lower: 30,
            upper: 80,
        }
    }
}

impl ProgressBounds {
    /// Percent after `processed` of `total` sections.
    pub fn interpolate(&self, processed: usize, total: usize) -> u8 {
        if total == 0 {
            return self.upper;
        }
        let span = u64::from(self.upper.saturating_sub(self.lower));
        let done = processed.min(total) as u64;
        self.lower + (span * done / total as u64) as u8
    }
}

/// Timetable engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Working days, in preference order.
    pub days: Vec<Day>,
    /// Per-section progress band.
    pub progress: ProgressBounds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            days: Day::WORKING_WEEK.to_vec(),
            progress: ProgressBounds::default(),
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration (Monday..Saturday, 30..80%).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TimetableError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the working days.
    pub fn with_days(mut self, days: Vec<Day>) -> Self {
        self.days = days;
        self
    }

    /// Sets the per-section progress band.
    pub fn with_progress_bounds(mut self, lower: u8, upper: u8) -> Self {
        self.progress = ProgressBounds { lower, upper };
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(TimetableError::config("at least one working day is required"));
        }
        let mut seen = HashSet::new();
        for day in &self.days {
            if !seen.insert(*day) {
                return Err(TimetableError::config(format!("duplicate working day: {day}")));
            }
        }
        let ProgressBounds { lower, upper } = self.progress;
        if lower > upper || upper > 100 {
            return Err(TimetableError::config(format!(
                "invalid progress bounds: {lower}..{upper}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = EngineConfig::default();
        assert_eq!(c.days, Day::WORKING_WEEK.to_vec());
        assert_eq!(c.progress, ProgressBounds { lower: 30, upper: 80 });
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_interpolate() {
        let b = ProgressBounds::default();
        assert_eq!(b.interpolate(0, 4), 30);
        assert_eq!(b.interpolate(1, 4), 42);
        assert_eq!(b.interpolate(2, 4), 55);
        assert_eq!(b.interpolate(4, 4), 80);
        assert_eq!(b.interpolate(9, 4), 80);
        assert_eq!(b.interpolate(0, 0), 80);
    }

    #[test]
    fn test_from_json_partial() {
        let c = EngineConfig::from_json_str(r#"{ "days": ["Monday", "Wednesday"] }"#).unwrap();
        assert_eq!(c.days, vec![Day::Monday, Day::Wednesday]);
        assert_eq!(c.progress, ProgressBounds::default());

        let c = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(c, EngineConfig::default());
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "days": [] }"#),
            Err(TimetableError::Config(_))
        ));
        assert!(EngineConfig::from_json_str(r#"{ "days": ["Sunday"] }"#).is_err());
        assert!(EngineConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_validate() {
        let dup = EngineConfig::new().with_days(vec![Day::Monday, Day::Monday]);
        assert!(dup.validate().is_err());

        let inverted = EngineConfig::new().with_progress_bounds(80, 30);
        assert!(inverted.validate().is_err());

        let over = EngineConfig::new().with_progress_bounds(30, 120);
        assert!(over.validate().is_err());
    }
}
