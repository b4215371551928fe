//! Timetabling domain models.
//!
//! Provides the input catalogs (sections, rooms, time slots) and the
//! output placements of the weekly timetable engine.
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | CourseSection | Task with N unit-length activities |
//! | Room | Capacity-filtered primary resource |
//! | Instructor | Human resource (optional) |
//! | TimeSlot x Day | Discrete time bucket |
//! | Placement | Assignment |

mod day;
mod room;
mod section;
mod time_slot;
mod timetable;

pub use day::{Day, ParseDayError};
pub use room::Room;
pub use section::{Course, CourseSection};
pub use time_slot::TimeSlot;
pub use timetable::{Placement, Timetable};
