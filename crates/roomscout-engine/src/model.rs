//! Wire-facing data model for the upstream room directory.
//!
//! Field names mirror the directory service's JSON and must round-trip
//! unchanged (`univis_key`, `orgname`, `start_time`, ...). Allocation times
//! stay raw strings here: they are validated at resolution time so that one
//! malformed record can fail a single room's evaluation instead of the whole
//! decode.

use serde::{Deserialize, Serialize};

/// A room as returned by the directory's rooms endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Directory-wide unique identifier.
    pub univis_key: String,
    pub building_key: String,
    pub floor: i32,
    pub number: i32,
    /// Organizational owner. May be empty for unowned rooms.
    #[serde(default)]
    pub orgname: String,
    /// Display name. May be empty; such rooms are never reported free.
    #[serde(default)]
    pub name: String,
    /// Seating capacity.
    #[serde(default)]
    pub size: u32,
}

impl Room {
    /// Short label `"{building_key}/{floor:02}.{number:03}"`.
    ///
    /// The zero padding is what makes plain lexicographic ordering of labels
    /// agree with numeric floor/room order ("F21/02.001" before "F21/10.001").
    pub fn short_label(&self) -> String {
        format!("{}/{:02}.{:03}", self.building_key, self.floor, self.number)
    }
}

/// Reference from an allocation to one of the rooms it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRef {
    pub univis_key: String,
}

/// A booking record: a wall-clock interval occupying zero or more rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Rooms this booking occupies; empty means the record binds no room.
    #[serde(default)]
    pub rooms: Vec<RoomRef>,
    /// Wall-clock `HH:MM`.
    pub start_time: String,
    /// Wall-clock `HH:MM`; `"24:00"` means end of day.
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Set on synthetic allocations derived from the exam schedule.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exam: bool,
}

impl Allocation {
    /// A plain booking for the given rooms and interval.
    pub fn new(
        rooms: Vec<RoomRef>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            rooms,
            start_time: start_time.into(),
            end_time: end_time.into(),
            department: None,
            exam: false,
        }
    }
}
