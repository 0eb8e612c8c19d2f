//! Wall-clock `HH:MM` values on an implicit 24-hour day.
//!
//! Allocation records carry bare wall-clock strings with one quirk calendar
//! libraries reject: an end time of `"24:00"` meaning "end of day". A booking
//! that runs to midnight must compare as ending at hour 24, not hour 0;
//! otherwise the interval appears to end before it starts and the room is
//! silently classified as always free at that boundary. [`WallTime`] keeps
//! hour 24 representable so end-of-day intervals resolve correctly.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Result, ScoutError};

/// A wall-clock time of day. Hours run 0–24; hour 24 is only valid as
/// `24:00` (end of day). Ordering is lexicographic on (hour, minute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallTime {
    hour: u8,
    minute: u8,
}

/// `24:00` — the exclusive upper bound of a day.
pub const END_OF_DAY: WallTime = WallTime {
    hour: 24,
    minute: 0,
};

impl WallTime {
    /// Parse an `HH:MM` string (a single-digit hour is accepted).
    ///
    /// Accepts `00:00` through `23:59`, plus `24:00` for end of day.
    ///
    /// # Errors
    /// Returns [`ScoutError::InvalidTime`] for anything else.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || ScoutError::InvalidTime(raw.to_string());

        let (h, m) = raw.split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;

        if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
            return Err(invalid());
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight (0–1440).
    pub fn total_minutes(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Inverse of [`total_minutes`](Self::total_minutes); values past the end
    /// of the day are clamped to `24:00`.
    pub fn from_total_minutes(minutes: u32) -> Self {
        if minutes >= 24 * 60 {
            return END_OF_DAY;
        }
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    /// Canonicalize an interval *end* time: an end in hour 0 means the
    /// allocation runs to the end of the day (allocations are date-scoped,
    /// nothing carries over past midnight). The comparison value for an end
    /// time therefore always has an hour in 1–24, never 0.
    pub fn as_interval_end(self) -> Self {
        if self.hour == 0 {
            END_OF_DAY
        } else {
            self
        }
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for WallTime {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for WallTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct WallTimeVisitor;

        impl Visitor<'_> for WallTimeVisitor {
            type Value = WallTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a wall-clock time string in HH:MM form")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<WallTime, E> {
                WallTime::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(WallTimeVisitor)
    }
}
