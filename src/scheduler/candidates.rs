//! Candidate enumeration.
//!
//! For a section, produces the (day, slot, room) search order:
//! days in configured order (outer), slots in catalog order (inner), and
//! within each cell the rooms that can seat the section, smallest first.
//! Candidates are grouped by cell because the scheduler places at most one
//! hour of a section per (day, slot).

use crate::models::{CourseSection, Day, Room, TimeSlot};

/// A single (day, slot, room) candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Day of the week.
    pub day: Day,
    /// Time slot.
    pub slot: &'a TimeSlot,
    /// Room.
    pub room: &'a Room,
}

/// The eligible rooms for one (day, slot) cell, in preference order.
#[derive(Debug, Clone)]
pub struct SlotCandidates<'a> {
    /// Day of the week.
    pub day: Day,
    /// Time slot.
    pub slot: &'a TimeSlot,
    /// Rooms with sufficient capacity, ascending by capacity.
    pub rooms: &'a [&'a Room],
}

impl<'a> SlotCandidates<'a> {
    /// Flattens the cell into individual candidates.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate<'a>> + '_ {
        self.rooms.iter().map(move |&room| Candidate {
            day: self.day,
            slot: self.slot,
            room,
        })
    }
}

/// Search-order generator over the day x slot x room space.
#[derive(Debug, Clone)]
pub struct CandidateEnumerator<'a> {
    days: &'a [Day],
    slots: &'a [TimeSlot],
    rooms: &'a [Room],
}

/// Per-section enumeration: the capacity-filtered room order is computed
/// once and reused for every cell.
#[derive(Debug, Clone)]
pub struct SectionCandidates<'a> {
    days: &'a [Day],
    slots: &'a [TimeSlot],
    rooms: Vec<&'a Room>,
}

impl<'a> CandidateEnumerator<'a> {
    /// Creates an enumerator over the given catalogs.
    ///
    /// `slots` must already be sorted by start time.
    pub fn new(days: &'a [Day], slots: &'a [TimeSlot], rooms: &'a [Room]) -> Self {
        Self { days, slots, rooms }
    }

    /// Rooms that can seat `headcount`, ascending by capacity.
    ///
    /// Rooms of equal capacity keep catalog order.
    pub fn eligible_rooms(&self, headcount: u32) -> Vec<&'a Room> {
        let mut rooms: Vec<&Room> = self.rooms.iter().filter(|r| r.fits(headcount)).collect();
        rooms.sort_by_key(|r| r.capacity);
        rooms
    }

    /// Prepares the search order for a section.
    pub fn for_section(&self, section: &CourseSection) -> SectionCandidates<'a> {
        SectionCandidates {
            days: self.days,
            slots: self.slots,
            rooms: self.eligible_rooms(section.max_students),
        }
    }
}

impl<'a> SectionCandidates<'a> {
    /// Whether any room can seat the section.
    pub fn has_eligible_rooms(&self) -> bool {
        !self.rooms.is_empty()
    }

    /// Eligible rooms in preference order.
    pub fn rooms(&self) -> &[&'a Room] {
        &self.rooms
    }

    /// Cells in search order. Empty if no room is eligible.
    pub fn cells(&self) -> impl Iterator<Item = SlotCandidates<'_>> + '_ {
        let rooms: &[&Room] = &self.rooms;
        let slots = if rooms.is_empty() { &[][..] } else { self.slots };
        self.days.iter().flat_map(move |&day| {
            slots.iter().map(move |slot| SlotCandidates { day, slot, rooms })
        })
    }

    /// All candidates in search order.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate<'_>> + '_ {
        let rooms: &[&Room] = &self.rooms;
        let slots = if rooms.is_empty() { &[][..] } else { self.slots };
        self.days.iter().flat_map(move |&day| {
            slots.iter().flat_map(move |slot| {
                rooms.iter().map(move |&room| Candidate { day, slot, room })
            })
        })
    }
}
