//! Occupancy resolution for a single room against a requested instant.
//!
//! Both functions are pure: they read an allocation slice and return a value,
//! leaving the inputs untouched. Interval comparison uses full `HH:MM`
//! precision. End times are canonicalized through
//! [`WallTime::as_interval_end`] so a booking running to midnight compares
//! with end hour 24, never 0.

use crate::error::Result;
use crate::model::Allocation;
use crate::wallclock::WallTime;

/// Whether any allocation covers `instant`.
///
/// An allocation covers the instant when `start <= instant < end`: the start
/// boundary is occupied, the end boundary is already free. A room with no
/// allocations is never occupied.
///
/// # Errors
/// Returns [`InvalidTime`](crate::ScoutError::InvalidTime) when an
/// allocation carries a malformed time string. Callers must treat that as
/// "availability unknown" and exclude the room, never as "free".
pub fn is_currently_allocated(allocations: &[Allocation], instant: WallTime) -> Result<bool> {
    for allocation in allocations {
        let start = WallTime::parse(&allocation.start_time)?;
        let end = WallTime::parse(&allocation.end_time)?.as_interval_end();
        if start <= instant && instant < end {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The earliest allocation start strictly after `instant`, if any.
///
/// Scans every allocation and keeps the global minimum qualifying start.
/// On equal starts the first-encountered allocation wins, which makes the
/// result deterministic for any fixed input order.
///
/// # Errors
/// Returns [`InvalidTime`](crate::ScoutError::InvalidTime) when an
/// allocation carries a malformed start time.
pub fn next_allocation(allocations: &[Allocation], instant: WallTime) -> Result<Option<WallTime>> {
    let mut next: Option<WallTime> = None;
    for allocation in allocations {
        let start = WallTime::parse(&allocation.start_time)?;
        if start > instant && next.is_none_or(|current| start < current) {
            next = Some(start);
        }
    }
    Ok(next)
}
