//! Timetable assignment engine.
//!
//! Assigns every required contact hour of every section to a
//! (day, time slot, room) cell such that no room and no instructor is
//! booked twice in the same cell.
//!
//! # Components
//!
//! - `ConflictTracker`: per-room and per-instructor booked (day, slot) keys
//! - `CandidateEnumerator`: capacity-filtered, deterministic search order
//! - `TimetableScheduler`: greedy, priority-ordered placement loop
//! - `ScheduleReport`: per-section outcomes and room utilization
//!
//! # Algorithm
//!
//! Greedy first-fit with no backtracking. It is not optimal; results depend
//! on section order, day order, and slot order.

mod candidates;
mod greedy;
mod report;
mod tracker;

pub use candidates::{Candidate, CandidateEnumerator, SectionCandidates, SlotCandidates};
pub use greedy::{TimetablePlan, TimetableRequest, TimetableScheduler};
pub use report::{ScheduleReport, SectionOutcome, SectionStatus};
pub use tracker::{BookingKey, ConflictTracker};
