//! # roomscout-engine
//!
//! Answers "which rooms are free right now?" over data from an upstream room
//! directory: room metadata on one side, allocation (booking) records on the
//! other. The engine groups allocations by room, filters out rooms that are
//! never bookable, resolves each remaining room's occupancy against the
//! requested wall-clock instant, and annotates every free room with its next
//! upcoming booking.
//!
//! The directory service and its transport are collaborators behind the
//! [`DirectoryClient`] trait; this crate is pure computation plus the typed
//! query contract.
//!
//! ## Quick start
//!
//! ```rust
//! use roomscout_engine::{
//!     compute_free_rooms, Allocation, ExclusionRules, Room, RoomRef, WallTime,
//! };
//!
//! let rooms = vec![Room {
//!     univis_key: "A1".into(),
//!     building_key: "F21".into(),
//!     floor: 1,
//!     number: 9,
//!     orgname: "Informatics".into(),
//!     name: "Seminar room".into(),
//!     size: 20,
//! }];
//! let allocations = vec![Allocation::new(
//!     vec![RoomRef { univis_key: "A1".into() }],
//!     "09:00",
//!     "11:00",
//! )];
//!
//! // At 10:00 the room is booked; at 12:00 it is free with nothing upcoming.
//! let at_ten = WallTime::parse("10:00").unwrap();
//! let rules = ExclusionRules::default();
//! assert!(compute_free_rooms(&rooms, &allocations, at_ten, None, &rules).is_empty());
//!
//! let at_noon = WallTime::parse("12:00").unwrap();
//! let free = compute_free_rooms(&rooms, &allocations, at_noon, None, &rules);
//! assert_eq!(free[0].short, "F21/01.009");
//! assert!(free[0].next_allocation.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`wallclock`] — `HH:MM` values with hour 24 ("24:00" = end of day)
//! - [`model`] — wire-facing room and allocation types
//! - [`exclusion`] — denylist-based room eligibility
//! - [`index`] — per-room grouping of the allocation list
//! - [`resolver`] — occupancy and next-booking resolution for one room
//! - [`pipeline`] — the full free-room computation over a batch
//! - [`locations`] — location name → building keys
//! - [`directory`] — upstream query types and the fetch trait
//! - [`exams`] — folding the exam schedule into the allocation list
//! - [`service`] — request validation and fetch orchestration
//! - [`error`] — error types

pub mod directory;
pub mod error;
pub mod exams;
pub mod exclusion;
pub mod index;
pub mod locations;
pub mod model;
pub mod pipeline;
pub mod resolver;
pub mod service;
pub mod wallclock;

pub use directory::{AllocationsQuery, DirectoryClient, RoomsQuery};
pub use error::{Result, ScoutError};
pub use exams::{exam_allocations, ExamAppointment, ExamRoom};
pub use exclusion::ExclusionRules;
pub use index::AllocationIndex;
pub use locations::LocationDirectory;
pub use model::{Allocation, Room, RoomRef};
pub use pipeline::{compute_free_rooms, RoomAvailability};
pub use resolver::{is_currently_allocated, next_allocation};
pub use service::{AvailabilityRequest, AvailabilityService};
pub use wallclock::{WallTime, END_OF_DAY};
