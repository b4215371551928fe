//! Course and course section models.
//!
//! A course defines the weekly contact-hour requirement (lecture + lab).
//! A section is one scheduled offering of a course: it inherits the hour
//! requirement, carries a headcount, and may be bound to an instructor.

use serde::{Deserialize, Serialize};

/// Course catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g. "CS101").
    pub code: String,
    /// Human-readable course name.
    pub name: String,
    /// Weekly lecture contact hours.
    pub lecture_hours: u32,
    /// Weekly lab contact hours.
    pub lab_hours: u32,
    /// Owning department, if known.
    pub department_id: Option<String>,
}

impl Course {
    /// Creates a course with the given weekly hours.
    pub fn new(code: impl Into<String>, lecture_hours: u32, lab_hours: u32) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            lecture_hours,
            lab_hours,
            department_id: None,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    /// Total weekly contact hours (lecture + lab), saturating at `u32::MAX`.
    #[inline]
    pub fn total_hours(&self) -> u32 {
        self.lecture_hours.saturating_add(self.lab_hours)
    }
}

/// A course section to be placed on the weekly timetable.
///
/// `course` is optional because sections are loaded from an external store
/// whose join may come back empty; such sections contribute no placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSection {
    /// Unique section identifier.
    pub id: String,
    /// Section label (e.g. "A", "LEC-01").
    pub name: String,
    /// Maximum enrolled headcount. Rooms below this capacity are never used.
    /// Missing from a stored row means 0.
    #[serde(default)]
    pub max_students: u32,
    /// Bound instructor. `None` = no instructor conflict checking.
    pub instructor_id: Option<String>,
    /// Course data (source of the hour requirement).
    pub course: Option<Course>,
}

impl CourseSection {
    /// Creates a section of the given course.
    pub fn new(id: impl Into<String>, course: Course) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            max_students: 0,
            instructor_id: None,
            course: Some(course),
        }
    }

    /// Creates a section without course data.
    pub fn without_course(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            max_students: 0,
            instructor_id: None,
            course: None,
        }
    }

    /// Sets the section label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the maximum headcount.
    pub fn with_max_students(mut self, max_students: u32) -> Self {
        self.max_students = max_students;
        self
    }

    /// Binds the section to an instructor.
    pub fn with_instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = Some(instructor_id.into());
        self
    }

    /// Lecture hours (0 without course data).
    pub fn lecture_hours(&self) -> u32 {
        self.course.as_ref().map_or(0, |c| c.lecture_hours)
    }

    /// Lab hours (0 without course data).
    pub fn lab_hours(&self) -> u32 {
        self.course.as_ref().map_or(0, |c| c.lab_hours)
    }

    /// Total weekly contact hours required.
    pub fn total_hours(&self) -> u32 {
        self.course.as_ref().map_or(0, Course::total_hours)
    }

    /// Whether the section is bound to an instructor.
    #[inline]
    pub fn has_instructor(&self) -> bool {
        self.instructor_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder() {
        let s = CourseSection::new("S1", Course::new("CS101", 3, 1).with_name("Intro"))
            .with_name("A")
            .with_max_students(40)
            .with_instructor("F1");

        assert_eq!(s.id, "S1");
        assert_eq!(s.name, "A");
        assert_eq!(s.max_students, 40);
        assert_eq!(s.instructor_id.as_deref(), Some("F1"));
        assert!(s.has_instructor());
        assert_eq!(s.lecture_hours(), 3);
        assert_eq!(s.lab_hours(), 1);
        assert_eq!(s.total_hours(), 4);
    }

    #[test]
    fn test_section_without_course() {
        let s = CourseSection::without_course("S1");
        assert_eq!(s.total_hours(), 0);
        assert_eq!(s.lecture_hours(), 0);
        assert!(!s.has_instructor());
    }

    #[test]
    fn test_total_hours_saturates() {
        let c = Course::new("HUGE", u32::MAX, 1);
        assert_eq!(c.total_hours(), u32::MAX);
    }

    #[test]
    fn test_missing_headcount_defaults_to_zero() {
        let s: CourseSection = serde_json::from_str(
            r#"{ "id": "S1", "name": "A", "instructor_id": null, "course": null }"#,
        )
        .unwrap();
        assert_eq!(s.max_students, 0);
    }

    #[test]
    fn test_course_department() {
        let c = Course::new("MA201", 2, 0).with_department("MATH");
        assert_eq!(c.department_id.as_deref(), Some("MATH"));
        assert_eq!(c.total_hours(), 2);
    }
}
