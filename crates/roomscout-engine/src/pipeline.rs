//! The availability pipeline: index, filter, resolve, sort.
//!
//! Takes one request's worth of rooms and allocations and produces the final
//! free-room list. Everything is computed fresh per call and the inputs are
//! never mutated; enrichment happens by building new [`RoomAvailability`]
//! values instead of threading one room object through multiple stages.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::exclusion::ExclusionRules;
use crate::index::AllocationIndex;
use crate::model::{Allocation, Room};
use crate::resolver;
use crate::wallclock::WallTime;

/// A free room: the room's public fields plus its short label, the
/// allocations touching it that day, and, when one exists, the start of
/// its next booking. `next_allocation` is omitted from JSON entirely when
/// there is no upcoming booking; absence is the signal, not `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAvailability {
    #[serde(flatten)]
    pub room: Room,
    pub short: String,
    pub allocations: Vec<Allocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_allocation: Option<WallTime>,
}

/// Compute the rooms free at `instant`, sorted by short label.
///
/// A room appears in the result iff the exclusion rules retain it and no
/// allocation covers the instant. Each result carries the room's full
/// allocation list and its next upcoming booking after the instant.
///
/// A room whose allocation data fails to parse is dropped from the result
/// and the failure logged: unknown availability reports as unavailable,
/// never as free. The batch itself always completes.
///
/// The output is stable: identical inputs yield identical, identically
/// ordered output (the short label's zero padding makes the lexicographic
/// sort agree with numeric building/floor/room order).
pub fn compute_free_rooms(
    rooms: &[Room],
    allocations: &[Allocation],
    instant: WallTime,
    min_size: Option<u32>,
    rules: &ExclusionRules,
) -> Vec<RoomAvailability> {
    let index = AllocationIndex::build(allocations);

    let mut free: Vec<RoomAvailability> = Vec::new();
    for room in rooms {
        if !rules.retains(room, min_size) {
            continue;
        }
        let bucket = index.for_room(&room.univis_key);

        let occupied = match resolver::is_currently_allocated(bucket, instant) {
            Ok(occupied) => occupied,
            Err(err) => {
                warn!(room = %room.univis_key, error = %err, "dropping room with unreadable allocation");
                continue;
            }
        };
        if occupied {
            continue;
        }

        // Cannot fail after is_currently_allocated parsed every interval,
        // but a room with half-readable data still resolves to exclusion.
        let next = match resolver::next_allocation(bucket, instant) {
            Ok(next) => next,
            Err(err) => {
                warn!(room = %room.univis_key, error = %err, "dropping room with unreadable allocation");
                continue;
            }
        };

        free.push(RoomAvailability {
            room: room.clone(),
            short: room.short_label(),
            allocations: bucket.to_vec(),
            next_allocation: next,
        });
    }

    free.sort_by(|a, b| a.short.cmp(&b.short));
    free
}
