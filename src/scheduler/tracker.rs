//! Room and instructor booking tracker.
//!
//! Keeps, per room and per instructor, the set of (day, slot) keys already
//! claimed during one scheduling run. Every commit goes through
//! [`ConflictTracker::book`] right after a successful
//! [`ConflictTracker::is_available`] check, so the resulting placements are
//! conflict-free by construction.

use std::collections::{HashMap, HashSet};

use crate::models::Day;

/// Atomic unit of conflict: a time slot on a specific day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingKey {
    /// Day of the week.
    pub day: Day,
    /// Time slot ID.
    pub time_slot_id: String,
}

impl BookingKey {
    /// Creates a booking key.
    pub fn new(day: Day, time_slot_id: impl Into<String>) -> Self {
        Self {
            day,
            time_slot_id: time_slot_id.into(),
        }
    }
}

/// Invocation-local booking state.
#[derive(Debug, Clone, Default)]
pub struct ConflictTracker {
    rooms: HashMap<String, HashSet<BookingKey>>,
    instructors: HashMap<String, HashSet<BookingKey>>,
}

impl ConflictTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the room (and instructor, if any) is free at (day, slot).
    pub fn is_available(
        &self,
        room_id: &str,
        instructor_id: Option<&str>,
        day: Day,
        time_slot_id: &str,
    ) -> bool {
        let key = BookingKey::new(day, time_slot_id);
        if is_booked(&self.rooms, room_id, &key) {
            return false;
        }
        match instructor_id {
            Some(instructor) => !is_booked(&self.instructors, instructor, &key),
            None => true,
        }
    }

    /// Claims (day, slot) for the room and instructor. Idempotent.
    ///
    /// Returns `true` if the room key was newly claimed.
    pub fn book(
        &mut self,
        room_id: &str,
        instructor_id: Option<&str>,
        day: Day,
        time_slot_id: &str,
    ) -> bool {
        let key = BookingKey::new(day, time_slot_id);
        if let Some(instructor) = instructor_id {
            self.instructors
                .entry(instructor.to_string())
                .or_default()
                .insert(key.clone());
        }
        self.rooms
            .entry(room_id.to_string())
            .or_default()
            .insert(key)
    }

    /// Number of keys booked for a room.
    pub fn room_bookings(&self, room_id: &str) -> usize {
        self.rooms.get(room_id).map_or(0, HashSet::len)
    }

    /// Number of keys booked for an instructor.
    pub fn instructor_bookings(&self, instructor_id: &str) -> usize {
        self.instructors.get(instructor_id).map_or(0, HashSet::len)
    }

    /// Total room bookings across all rooms.
    pub fn total_room_bookings(&self) -> usize {
        self.rooms.values().map(HashSet::len).sum()
    }
}

fn is_booked(map: &HashMap<String, HashSet<BookingKey>>, id: &str, key: &BookingKey) -> bool {
    map.get(id).is_some_and(|keys| keys.contains(key))
}
