//! Room model.
//!
//! Rooms host sessions. Capacity is a hard filter: a room never hosts a
//! section whose headcount exceeds it.

use serde::{Deserialize, Serialize};

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room number as displayed (e.g. "101").
    pub number: String,
    /// Building name.
    pub building: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Free-form room type (e.g. "lecture", "lab"). Informational only.
    pub room_type: Option<String>,
}

impl Room {
    /// Creates a room with the given capacity.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            number: String::new(),
            building: String::new(),
            capacity,
            room_type: None,
        }
    }

    /// Sets the room number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    /// Sets the room type.
    pub fn with_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = Some(room_type.into());
        self
    }

    /// Whether this room can seat the given headcount.
    #[inline]
    pub fn fits(&self, headcount: u32) -> bool {
        self.capacity >= headcount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("R1", 40)
            .with_number("101")
            .with_building("Main")
            .with_type("lecture");

        assert_eq!(r.id, "R1");
        assert_eq!(r.number, "101");
        assert_eq!(r.building, "Main");
        assert_eq!(r.capacity, 40);
        assert_eq!(r.room_type.as_deref(), Some("lecture"));
    }

    #[test]
    fn test_room_fits() {
        let r = Room::new("R1", 30);
        assert!(r.fits(0));
        assert!(r.fits(30));
        assert!(!r.fits(31));
    }
}
