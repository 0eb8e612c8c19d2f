//! Folding the exam schedule into the allocation list.
//!
//! Exam appointments come from a separate endpoint and identify rooms by
//! building/floor/number instead of by key. Appointments for the requested
//! date are converted into synthetic [`Allocation`]s (flagged `exam`) so the
//! pipeline treats an exam exactly like any other booking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{Allocation, Room, RoomRef};
use crate::wallclock::WallTime;

/// Room reference as the exam endpoint serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRoom {
    #[serde(default)]
    pub building_key: Option<String>,
    pub floor: i32,
    pub number: i32,
}

impl ExamRoom {
    /// Short label matching [`Room::short_label`], when the building is known.
    fn short_label(&self) -> Option<String> {
        self.building_key
            .as_ref()
            .map(|key| format!("{}/{:02}.{:03}", key, self.floor, self.number))
    }
}

/// One exam appointment from the schedule endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamAppointment {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub room: ExamRoom,
    /// Start time `HH:MM`; appointments without one occupy nothing.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub minutes_duration: Option<u32>,
}

/// Synthetic allocations for the exams held on `date` in any of `rooms`.
///
/// An appointment contributes one allocation when its date matches, its room
/// resolves to a fetched room via the short label, and both start time and
/// duration are present. Exams running past midnight are truncated to end of
/// day; allocations are date-scoped. Malformed entries are logged and
/// skipped; a bad schedule row never takes the batch down.
pub fn exam_allocations(
    exams: &[ExamAppointment],
    date: NaiveDate,
    rooms: &[Room],
) -> Vec<Allocation> {
    let mut out = Vec::new();
    for exam in exams {
        let exam_date = match NaiveDate::parse_from_str(&exam.date, "%Y-%m-%d") {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(date = %exam.date, "skipping exam appointment with unreadable date");
                continue;
            }
        };
        if exam_date != date {
            continue;
        }
        let Some(short) = exam.room.short_label() else {
            continue;
        };
        let Some(room) = rooms.iter().find(|room| room.short_label() == short) else {
            continue;
        };
        let (Some(time), Some(duration)) = (&exam.time, exam.minutes_duration) else {
            continue;
        };
        let start = match WallTime::parse(time) {
            Ok(start) => start,
            Err(err) => {
                warn!(room = %short, error = %err, "skipping exam appointment with unreadable time");
                continue;
            }
        };
        let end = WallTime::from_total_minutes(start.total_minutes() + duration);

        out.push(Allocation {
            rooms: vec![RoomRef {
                univis_key: room.univis_key.clone(),
            }],
            start_time: start.to_string(),
            end_time: end.to_string(),
            department: None,
            exam: true,
        });
    }
    out
}
