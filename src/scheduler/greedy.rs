//! Greedy section scheduler.
//!
//! # Algorithm
//!
//! 1. Order sections: instructor-bound first, otherwise input order (stable).
//! 2. For each section, walk days (outer) and slots (inner). In each cell,
//!    take the first eligible room (smallest sufficient capacity) that is
//!    free for both the room and the section's instructor.
//! 3. Place lecture hours first; once the lecture budget is used, further
//!    hours of the same section are lab hours.
//! 4. Stop a section when its hours are placed or the cells run out.
//!
//! No backtracking: outcomes depend on iteration order, and sections that
//! cannot be fully placed are reported, not repaired.
//!
//! # Complexity
//! O(s * d * t * r) where s=sections, d=days, t=time slots, r=rooms.

use tracing::{debug, info, warn};

use super::candidates::CandidateEnumerator;
use super::report::{ScheduleReport, SectionOutcome, SectionStatus};
use super::tracker::ConflictTracker;
use crate::config::EngineConfig;
use crate::models::{CourseSection, Placement, Room, TimeSlot, Timetable};
use crate::progress::ProgressReporter;

/// Input catalogs for one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct TimetableRequest {
    /// Sections to place.
    pub sections: Vec<CourseSection>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Time slots, ascending by start time.
    pub time_slots: Vec<TimeSlot>,
}

impl TimetableRequest {
    /// Creates a request from the three catalogs.
    pub fn new(sections: Vec<CourseSection>, rooms: Vec<Room>, time_slots: Vec<TimeSlot>) -> Self {
        Self {
            sections,
            rooms,
            time_slots,
        }
    }

    /// Sorts the slot catalog by start time.
    pub fn with_sorted_slots(mut self) -> Self {
        TimeSlot::sort_catalog(&mut self.time_slots);
        self
    }
}

/// Output of a scheduling run: the timetable and its report.
#[derive(Debug, Clone, Default)]
pub struct TimetablePlan {
    /// Placements in commit order.
    pub timetable: Timetable,
    /// Per-section outcomes and room utilization.
    pub report: ScheduleReport,
}

/// Greedy, priority-ordered timetable scheduler.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, CourseSection, Room, TimeSlot};
/// use u_timetable::progress::NoProgress;
/// use u_timetable::scheduler::{TimetableRequest, TimetableScheduler};
///
/// let request = TimetableRequest::new(
///     vec![CourseSection::new("S1", Course::new("CS101", 2, 1)).with_max_students(25)],
///     vec![Room::new("R1", 30)],
///     vec![TimeSlot::parse("T1", "09:00", "10:00").unwrap()],
/// );
///
/// let plan = TimetableScheduler::new().plan(&request, &NoProgress);
/// assert_eq!(plan.timetable.len(), 3);
/// assert!(plan.report.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableScheduler {
    config: EngineConfig,
}

impl TimetableScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Schedules a request.
    pub fn plan(&self, request: &TimetableRequest, progress: &dyn ProgressReporter) -> TimetablePlan {
        self.schedule(
            &request.sections,
            &request.rooms,
            &request.time_slots,
            progress,
        )
    }

    /// Places every section's contact hours onto (day, slot, room) cells.
    ///
    /// Reports progress after each section. Inputs are never modified.
    pub fn schedule(
        &self,
        sections: &[CourseSection],
        rooms: &[Room],
        time_slots: &[TimeSlot],
        progress: &dyn ProgressReporter,
    ) -> TimetablePlan {
        let days = &self.config.days;
        let enumerator = CandidateEnumerator::new(days, time_slots, rooms);
        let mut tracker = ConflictTracker::new();
        let mut timetable = Timetable::new();
        let mut report = ScheduleReport::default();

        info!(
            sections = sections.len(),
            rooms = rooms.len(),
            time_slots = time_slots.len(),
            days = days.len(),
            "scheduling sections"
        );

        let order = priority_order(sections);
        let total = order.len();
        for (processed, &idx) in order.iter().enumerate() {
            let outcome = place_section(&sections[idx], &enumerator, &mut tracker, &mut timetable);
            report.add_section(outcome);

            let done = processed + 1;
            progress.report(
                self.config.progress.interpolate(done, total),
                &format!("Scheduled {done}/{total} sections..."),
            );
        }

        let cells = days.len() * time_slots.len();
        if cells > 0 {
            for room in rooms {
                let used = tracker.room_bookings(&room.id) as f64;
                report
                    .room_utilization
                    .insert(room.id.clone(), used / cells as f64);
            }
        }

        info!(
            placements = timetable.len(),
            required_hours = report.required_hours,
            shortfall_hours = report.shortfall_hours(),
            "scheduling finished"
        );

        TimetablePlan { timetable, report }
    }
}

/// Section indices, instructor-bound sections first, stable otherwise.
pub(crate) fn priority_order(sections: &[CourseSection]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..sections.len()).collect();
    indices.sort_by_key(|&i| !sections[i].has_instructor());
    indices
}

fn place_section(
    section: &CourseSection,
    enumerator: &CandidateEnumerator<'_>,
    tracker: &mut ConflictTracker,
    timetable: &mut Timetable,
) -> SectionOutcome {
    let Some(course) = section.course.as_ref() else {
        warn!(section = %section.id, "section has no course data, skipping");
        return SectionOutcome::new(&section.id, 0, 0, SectionStatus::MissingCourse);
    };

    let required = course.total_hours();
    if required == 0 {
        return SectionOutcome::new(&section.id, 0, 0, SectionStatus::NoHoursRequired);
    }

    let candidates = enumerator.for_section(section);
    if !candidates.has_eligible_rooms() {
        warn!(
            section = %section.id,
            headcount = section.max_students,
            "no room large enough for section"
        );
        return SectionOutcome::new(&section.id, required, 0, SectionStatus::NoEligibleRoom);
    }

    let instructor = section.instructor_id.as_deref();
    let mut scheduled = 0u32;

    for cell in candidates.cells() {
        if scheduled >= required {
            break;
        }

        let free = cell
            .rooms
            .iter()
            .find(|room| tracker.is_available(&room.id, instructor, cell.day, &cell.slot.id));

        if let Some(room) = free {
            tracker.book(&room.id, instructor, cell.day, &cell.slot.id);
            let is_lab = scheduled >= course.lecture_hours;
            debug!(
                section = %section.id,
                room = %room.id,
                day = %cell.day,
                slot = %cell.slot.id,
                is_lab,
                "placed contact hour"
            );
            timetable.add_placement(
                Placement::new(&section.id, &room.id, &cell.slot.id, cell.day).with_lab(is_lab),
            );
            scheduled += 1;
        }
    }

    let outcome = SectionOutcome::from_search(&section.id, required, scheduled);
    if outcome.status != SectionStatus::Complete {
        warn!(
            section = %section.id,
            required,
            scheduled,
            "section could not be fully scheduled"
        );
    }
    outcome
}
