//! Synthetic timetable problem generator.
//!
//! Produces random but reproducible catalogs (rooms, hourly time slots,
//! sections) from a seed. Used for property checks and load testing of the
//! scheduler; generated problems are not guaranteed to be fully placeable.

use chrono::NaiveTime;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Course, CourseSection, Room, TimeSlot};
use crate::scheduler::TimetableRequest;

/// Parameters for generated problems.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    /// Number of rooms.
    pub num_rooms: usize,
    /// Number of consecutive one-hour slots per day.
    pub slots_per_day: u32,
    /// Hour of the first slot (0-23).
    pub first_hour: u32,
    /// Number of sections.
    pub num_sections: usize,
    /// Number of distinct instructors.
    pub num_instructors: usize,
    /// Probability that a section is bound to an instructor (0.0..1.0).
    pub instructor_probability: f64,
    /// Room capacity range (min, max).
    pub room_capacity_range: (u32, u32),
    /// Section headcount range (min, max).
    pub headcount_range: (u32, u32),
    /// Lecture hours range (min, max).
    pub lecture_hours_range: (u32, u32),
    /// Lab hours range (min, max).
    pub lab_hours_range: (u32, u32),
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            num_rooms: 4,
            slots_per_day: 6,
            first_hour: 8,
            num_sections: 20,
            num_instructors: 6,
            instructor_probability: 0.7,
            room_capacity_range: (20, 80),
            headcount_range: (10, 90),
            lecture_hours_range: (1, 3),
            lab_hours_range: (0, 2),
        }
    }
}

impl SyntheticConfig {
    /// Few sections, ample rooms.
    pub fn easy() -> Self {
        Self {
            num_rooms: 6,
            num_sections: 10,
            headcount_range: (10, 60),
            ..Self::default()
        }
    }

    /// More sections than the room/slot space comfortably holds.
    pub fn hard() -> Self {
        Self {
            num_rooms: 3,
            slots_per_day: 4,
            num_sections: 40,
            num_instructors: 4,
            instructor_probability: 0.9,
            ..Self::default()
        }
    }
}

/// Seeded generator of timetable problems.
#[derive(Debug)]
pub struct SyntheticGenerator {
    config: SyntheticConfig,
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Creates a generator with the given config and seed.
    pub fn new(config: SyntheticConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a complete request. Slots come sorted by start time.
    pub fn generate(&mut self) -> TimetableRequest {
        let rooms = self.generate_rooms();
        let time_slots = self.generate_time_slots();
        let sections = self.generate_sections();
        TimetableRequest::new(sections, rooms, time_slots)
    }

    fn generate_rooms(&mut self) -> Vec<Room> {
        let (min_cap, max_cap) = self.config.room_capacity_range;
        (0..self.config.num_rooms)
            .map(|i| {
                Room::new(format!("R{i}"), self.rng.random_range(min_cap..=max_cap))
                    .with_number(format!("{}", 100 + i))
            })
            .collect()
    }

    fn generate_time_slots(&self) -> Vec<TimeSlot> {
        (0..self.config.slots_per_day)
            .filter_map(|i| {
                let hour = self.config.first_hour + i;
                let start = NaiveTime::from_hms_opt(hour, 0, 0)?;
                let end = NaiveTime::from_hms_opt(hour + 1, 0, 0)?;
                Some(TimeSlot::new(format!("T{i}"), start, end))
            })
            .collect()
    }

    fn generate_sections(&mut self) -> Vec<CourseSection> {
        let instructors: Vec<String> = (0..self.config.num_instructors)
            .map(|i| format!("F{i}"))
            .collect();
        let (min_head, max_head) = self.config.headcount_range;
        let (min_lec, max_lec) = self.config.lecture_hours_range;
        let (min_lab, max_lab) = self.config.lab_hours_range;

        (0..self.config.num_sections)
            .map(|i| {
                let course = Course::new(
                    format!("C{i:03}"),
                    self.rng.random_range(min_lec..=max_lec),
                    self.rng.random_range(min_lab..=max_lab),
                );
                let mut section = CourseSection::new(format!("S{i}"), course)
                    .with_max_students(self.rng.random_range(min_head..=max_head));
                if self.rng.random_bool(self.config.instructor_probability.clamp(0.0, 1.0)) {
                    if let Some(instructor) = instructors.choose(&mut self.rng) {
                        section = section.with_instructor(instructor.clone());
                    }
                }
                section
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::progress::NoProgress;
    use crate::scheduler::TimetableScheduler;
    use crate::validation::{validate_input, verify_timetable};

    #[test]
    fn test_generation_is_reproducible() {
        let a = SyntheticGenerator::new(SyntheticConfig::default(), 7).generate();
        let b = SyntheticGenerator::new(SyntheticConfig::default(), 7).generate();
        assert_eq!(a.sections, b.sections);
        assert_eq!(a.rooms, b.rooms);
        assert_eq!(a.time_slots, b.time_slots);
    }

    #[test]
    fn test_generated_input_is_valid() {
        let config = SyntheticConfig::default();
        let request = SyntheticGenerator::new(config.clone(), 1).generate();
        assert_eq!(request.rooms.len(), config.num_rooms);
        assert_eq!(request.sections.len(), config.num_sections);
        assert_eq!(request.time_slots.len(), config.slots_per_day as usize);
        assert!(validate_input(&request.sections, &request.rooms, &request.time_slots).is_ok());
    }

    #[test]
    fn test_scheduler_invariants_hold_on_random_problems() {
        let scheduler = TimetableScheduler::new();
        for seed in 0..25 {
            for config in [SyntheticConfig::easy(), SyntheticConfig::default(), SyntheticConfig::hard()] {
                let request = SyntheticGenerator::new(config, seed).generate();
                let plan = scheduler.plan(&request, &NoProgress);

                let violations = verify_timetable(&plan.timetable, &request.sections, &request.rooms);
                assert!(violations.is_empty(), "seed {seed}: {violations:?}");
                assert_eq!(plan.report.placement_count, plan.timetable.len());
            }
        }
    }

    #[test]
    fn test_instructor_bound_sections_are_not_worse_off() {
        // Identical hour requirements competing for one small room:
        // the bound section is scheduled first and gets at least as much.
        let scheduler = TimetableScheduler::with_config(
            EngineConfig::new().with_days(vec![crate::models::Day::Monday]),
        );
        for seed in 0..10 {
            let mut request = SyntheticGenerator::new(
                SyntheticConfig {
                    num_rooms: 1,
                    slots_per_day: 3,
                    num_sections: 0,
                    room_capacity_range: (50, 50),
                    ..SyntheticConfig::default()
                },
                seed,
            )
            .generate();
            request.sections = vec![
                CourseSection::new("free", Course::new("C", 2, 1)).with_max_students(40),
                CourseSection::new("bound", Course::new("C", 2, 1))
                    .with_max_students(40)
                    .with_instructor("F1"),
            ];

            let plan = scheduler.plan(&request, &NoProgress);
            let bound = plan.timetable.for_section("bound").len();
            let free = plan.timetable.for_section("free").len();
            assert!(bound >= free);
            assert_eq!(bound, 3);
        }
    }
}
