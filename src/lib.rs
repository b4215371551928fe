//! Weekly timetable assignment engine for the U-Engine ecosystem.
//!
//! Places course sections onto a weekly grid of (day, time slot, room)
//! cells so that no room and no instructor is double-booked, using a
//! deterministic greedy search.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CourseSection`, `Course`, `Room`,
//!   `TimeSlot`, `Day`, `Placement`, `Timetable`
//! - **`scheduler`**: Conflict tracking, candidate enumeration, the greedy
//!   placement loop, and the per-section report
//! - **`service`**: Clear-then-insert generation against a `PlacementStore`
//! - **`store`**: Storage trait plus in-memory and JSON-file stores
//! - **`progress`**: Fire-and-forget progress reporting
//! - **`config`**: Working days and progress bands
//! - **`validation`**: Input checks and timetable verification
//! - **`synthetic`**: Seeded random problem generation
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Course, CourseSection, Room, TimeSlot};
//! use u_timetable::progress::NoProgress;
//! use u_timetable::scheduler::{TimetableRequest, TimetableScheduler};
//!
//! let request = TimetableRequest::new(
//!     vec![
//!         CourseSection::new("S1", Course::new("CS101", 1, 0)).with_max_students(30),
//!         CourseSection::new("S2", Course::new("CS102", 1, 0)).with_max_students(30),
//!     ],
//!     vec![Room::new("R1", 30)],
//!     vec![TimeSlot::parse("T1", "09:00", "10:00").unwrap()],
//! );
//!
//! let plan = TimetableScheduler::new().plan(&request, &NoProgress);
//! assert_eq!(plan.timetable.len(), 2); // Monday and Tuesday
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

pub mod config;
pub mod error;
pub mod models;
pub mod progress;
pub mod scheduler;
pub mod service;
pub mod store;
pub mod synthetic;
pub mod validation;

pub use config::EngineConfig;
pub use error::{GenerationOutcome, Result, StoreError, TimetableError};
pub use service::TimetableService;
