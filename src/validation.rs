//! Input validation and timetable verification.
//!
//! `validate_input` checks the catalogs before scheduling. It is advisory:
//! the scheduler tolerates every problem it reports (sections without
//! course data are skipped, unsorted slots only change the search order).
//!
//! `verify_timetable` checks a produced timetable against the hard
//! constraints. Scheduler output is conflict-free by construction, so
//! this is for timetables from other sources (edited or imported) and for
//! tests.

use crate::models::{CourseSection, Day, Room, TimeSlot, Timetable};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A time slot does not end after it starts.
    MalformedTimeSlot,
    /// The slot catalog is not ascending by start time.
    UnsortedTimeSlots,
    /// A section has no course data.
    MissingCourse,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the scheduling catalogs.
///
/// Checks:
/// 1. No duplicate section, room, or time slot IDs
/// 2. Every time slot ends after it starts
/// 3. Time slots are sorted by start time
/// 4. Every section has course data
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    sections: &[CourseSection],
    rooms: &[Room],
    time_slots: &[TimeSlot],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique(sections.iter().map(|s| s.id.as_str()), "section", &mut errors);
    check_unique(rooms.iter().map(|r| r.id.as_str()), "room", &mut errors);
    check_unique(time_slots.iter().map(|t| t.id.as_str()), "time slot", &mut errors);

    for slot in time_slots {
        if !slot.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTimeSlot,
                format!(
                    "Time slot '{}' ends at {} but starts at {}",
                    slot.id, slot.end, slot.start
                ),
            ));
        }
    }

    if !TimeSlot::is_sorted_catalog(time_slots) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnsortedTimeSlots,
            "Time slots are not sorted by start time",
        ));
    }

    for section in sections.iter().filter(|s| s.course.is_none()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingCourse,
            format!("Section '{}' has no course data", section.id),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
}

/// A hard-constraint violation in a timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (section, room, or instructor).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// A room hosts two placements in the same (day, slot).
    RoomDoubleBooked,
    /// An instructor teaches two placements in the same (day, slot).
    InstructorDoubleBooked,
    /// A room is smaller than the section's headcount.
    CapacityExceeded,
    /// A section received more placements than its required hours.
    HoursExceeded,
    /// A lab hour precedes one of the section's lecture hours.
    LabBeforeLecture,
    /// A placement references an unknown section or room.
    UnknownReference,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

/// Checks a timetable against the hard constraints.
///
/// Lecture/lab ordering is checked in placement order: for a section with
/// `k` placements, the first `min(k, lecture_hours)` must be lectures and
/// the rest labs.
pub fn verify_timetable(
    timetable: &Timetable,
    sections: &[CourseSection],
    rooms: &[Room],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let section_by_id: HashMap<&str, &CourseSection> =
        sections.iter().map(|s| (s.id.as_str(), s)).collect();
    let room_by_id: HashMap<&str, &Room> = rooms.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut room_cells: HashSet<(&str, Day, &str)> = HashSet::new();
    let mut instructor_cells: HashSet<(&str, Day, &str)> = HashSet::new();
    let mut placed: HashMap<&str, u32> = HashMap::new();

    for p in &timetable.placements {
        let section = section_by_id.get(p.section_id.as_str());
        let room = room_by_id.get(p.room_id.as_str());

        if section.is_none() {
            violations.push(Violation::new(
                ViolationType::UnknownReference,
                &p.section_id,
                format!("Placement references unknown section '{}'", p.section_id),
            ));
        }
        if room.is_none() {
            violations.push(Violation::new(
                ViolationType::UnknownReference,
                &p.room_id,
                format!("Placement references unknown room '{}'", p.room_id),
            ));
        }

        if !room_cells.insert((p.room_id.as_str(), p.day, p.time_slot_id.as_str())) {
            violations.push(Violation::new(
                ViolationType::RoomDoubleBooked,
                &p.room_id,
                format!(
                    "Room '{}' double-booked on {} slot '{}'",
                    p.room_id, p.day, p.time_slot_id
                ),
            ));
        }

        let Some(section) = section else { continue };

        if let Some(instructor) = section.instructor_id.as_deref() {
            if !instructor_cells.insert((instructor, p.day, p.time_slot_id.as_str())) {
                violations.push(Violation::new(
                    ViolationType::InstructorDoubleBooked,
                    instructor,
                    format!(
                        "Instructor '{}' double-booked on {} slot '{}'",
                        instructor, p.day, p.time_slot_id
                    ),
                ));
            }
        }

        if let Some(room) = room {
            if !room.fits(section.max_students) {
                violations.push(Violation::new(
                    ViolationType::CapacityExceeded,
                    &room.id,
                    format!(
                        "Room '{}' (capacity {}) hosts section '{}' of {} students",
                        room.id, room.capacity, section.id, section.max_students
                    ),
                ));
            }
        }

        let index = placed.entry(section.id.as_str()).or_insert(0);
        let expect_lab = *index >= section.lecture_hours();
        if p.is_lab != expect_lab {
            violations.push(Violation::new(
                ViolationType::LabBeforeLecture,
                &section.id,
                format!(
                    "Section '{}' placement {} should be {}",
                    section.id,
                    *index + 1,
                    if expect_lab { "lab" } else { "lecture" }
                ),
            ));
        }
        *index += 1;
    }

    for (section_id, count) in placed {
        let required = section_by_id[section_id].total_hours();
        if count > required {
            violations.push(Violation::new(
                ViolationType::HoursExceeded,
                section_id,
                format!("Section '{section_id}' has {count} placements but requires {required}"),
            ));
        }
    }

    violations
}
