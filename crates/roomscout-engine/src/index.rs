//! Per-room lookup over a flat allocation list.

use std::collections::HashMap;

use crate::model::Allocation;

/// Allocations grouped by the room they occupy, built fresh per request.
///
/// Rooms that appear in no allocation are simply absent; an absent key means
/// "no allocations", never an error. Within a bucket, allocations keep their
/// first-seen order; downstream resolution iterates every entry and assumes
/// nothing about sortedness.
#[derive(Debug, Default)]
pub struct AllocationIndex {
    buckets: HashMap<String, Vec<Allocation>>,
}

impl AllocationIndex {
    /// Group `allocations` by room key. An allocation with an empty room
    /// list contributes nothing.
    pub fn build(allocations: &[Allocation]) -> Self {
        let mut buckets: HashMap<String, Vec<Allocation>> = HashMap::new();
        for allocation in allocations {
            for room in &allocation.rooms {
                buckets
                    .entry(room.univis_key.clone())
                    .or_default()
                    .push(allocation.clone());
            }
        }
        Self { buckets }
    }

    /// All allocations touching the given room, in first-seen order.
    /// Empty for rooms the index has never seen.
    pub fn for_room(&self, univis_key: &str) -> &[Allocation] {
        self.buckets.get(univis_key).map_or(&[], Vec::as_slice)
    }

    /// Number of rooms with at least one allocation.
    pub fn room_count(&self) -> usize {
        self.buckets.len()
    }
}
