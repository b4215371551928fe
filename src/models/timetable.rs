//! Timetable (solution) model.
//!
//! A timetable is the full list of placements produced by one scheduling
//! run. Each placement is one contact hour of a section, bound to a day,
//! a time slot, and a room.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{CourseSection, Day};

/// One scheduled contact hour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Scheduled section ID.
    pub section_id: String,
    /// Hosting room ID.
    pub room_id: String,
    /// Time slot ID.
    pub time_slot_id: String,
    /// Day of the week.
    pub day: Day,
    /// Whether this hour is a lab hour (otherwise lecture).
    pub is_lab: bool,
}

impl Placement {
    /// Creates a lecture-hour placement.
    pub fn new(
        section_id: impl Into<String>,
        room_id: impl Into<String>,
        time_slot_id: impl Into<String>,
        day: Day,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            room_id: room_id.into(),
            time_slot_id: time_slot_id.into(),
            day,
            is_lab: false,
        }
    }

    /// Marks the placement as a lab hour.
    pub fn with_lab(mut self, is_lab: bool) -> Self {
        self.is_lab = is_lab;
        self
    }
}

/// A complete timetable: placements in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Placements, in the order the scheduler committed them.
    pub placements: Vec<Placement>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing placement list.
    pub fn from_placements(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    /// Adds a placement.
    pub fn add_placement(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the timetable has no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements of a section, in commit order.
    pub fn for_section(&self, section_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.section_id == section_id)
            .collect()
    }

    /// Placements hosted by a room.
    pub fn for_room(&self, room_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.room_id == room_id)
            .collect()
    }

    /// Placements on a day.
    pub fn for_day(&self, day: Day) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.day == day).collect()
    }

    /// Placements in a (day, slot) cell, across all rooms.
    pub fn for_slot(&self, day: Day, time_slot_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.day == day && p.time_slot_id == time_slot_id)
            .collect()
    }

    /// Placements taught by an instructor, resolved through the sections.
    pub fn for_instructor<'a>(
        &'a self,
        instructor_id: &str,
        sections: &[CourseSection],
    ) -> Vec<&'a Placement> {
        let taught: HashSet<&str> = sections
            .iter()
            .filter(|s| s.instructor_id.as_deref() == Some(instructor_id))
            .map(|s| s.id.as_str())
            .collect();
        self.placements
            .iter()
            .filter(|p| taught.contains(p.section_id.as_str()))
            .collect()
    }

    /// Number of scheduled hours per section.
    pub fn hours_by_section(&self) -> HashMap<&str, u32> {
        let mut hours: HashMap<&str, u32> = HashMap::new();
        for p in &self.placements {
            *hours.entry(p.section_id.as_str()).or_insert(0) += 1;
        }
        hours
    }

    /// Number of lab placements.
    pub fn lab_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_lab).count()
    }

    /// Number of lecture placements.
    pub fn lecture_count(&self) -> usize {
        self.len() - self.lab_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;

    fn sample_timetable() -> Timetable {
        let mut t = Timetable::new();
        t.add_placement(Placement::new("S1", "R1", "T1", Day::Monday));
        t.add_placement(Placement::new("S1", "R1", "T2", Day::Monday).with_lab(true));
        t.add_placement(Placement::new("S2", "R2", "T1", Day::Monday));
        t.add_placement(Placement::new("S2", "R1", "T1", Day::Tuesday));
        t
    }

    #[test]
    fn test_counts() {
        let t = sample_timetable();
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
        assert_eq!(t.lab_count(), 1);
        assert_eq!(t.lecture_count(), 3);
    }

    #[test]
    fn test_for_section() {
        let t = sample_timetable();
        let s1 = t.for_section("S1");
        assert_eq!(s1.len(), 2);
        assert!(!s1[0].is_lab);
        assert!(s1[1].is_lab);
        assert!(t.for_section("S99").is_empty());
    }

    #[test]
    fn test_for_room_and_day() {
        let t = sample_timetable();
        assert_eq!(t.for_room("R1").len(), 3);
        assert_eq!(t.for_day(Day::Monday).len(), 3);
        assert_eq!(t.for_day(Day::Saturday).len(), 0);
        assert_eq!(t.for_slot(Day::Monday, "T1").len(), 2);
    }

    #[test]
    fn test_for_instructor() {
        let t = sample_timetable();
        let sections = vec![
            CourseSection::new("S1", Course::new("C1", 1, 1)).with_instructor("F1"),
            CourseSection::new("S2", Course::new("C2", 2, 0)),
        ];
        assert_eq!(t.for_instructor("F1", &sections).len(), 2);
        assert!(t.for_instructor("F2", &sections).is_empty());
    }

    #[test]
    fn test_hours_by_section() {
        let t = sample_timetable();
        let hours = t.hours_by_section();
        assert_eq!(hours["S1"], 2);
        assert_eq!(hours["S2"], 2);
    }

    #[test]
    fn test_empty_timetable() {
        let t = Timetable::new();
        assert!(t.is_empty());
        assert_eq!(t.lab_count(), 0);
        assert!(t.hours_by_section().is_empty());
    }

    #[test]
    fn test_placement_serde_shape() {
        let p = Placement::new("S1", "R1", "T1", Day::Friday).with_lab(true);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["day"], "Friday");
        assert_eq!(json["is_lab"], true);
        assert_eq!(json["time_slot_id"], "T1");
    }
}
