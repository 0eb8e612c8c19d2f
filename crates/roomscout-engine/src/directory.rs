//! The upstream directory contract: typed queries and the fetch trait.
//!
//! The directory service itself (and whatever transport reaches it) is a
//! collaborator, not part of this crate. What lives here is the shape of the
//! conversation: which parameters each endpoint takes, and a trait the
//! orchestration layer can drive. Transports encode [`params`](RoomsQuery::params)
//! pairs into their own URL/query representation.

use chrono::NaiveDate;

use crate::error::Result;
use crate::exams::ExamAppointment;
use crate::model::{Allocation, Room};
use crate::wallclock::WallTime;

/// Parameters for the rooms endpoint. Both filters are optional; an empty
/// query fetches every room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomsQuery {
    pub department: Option<String>,
    /// Restrict to these buildings; the parameter repeats per key.
    pub building_keys: Vec<String>,
}

impl RoomsQuery {
    /// Scope the query to a set of buildings.
    pub fn for_buildings<K: Into<String>>(building_keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            department: None,
            building_keys: building_keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Ordered key/value pairs for a transport to encode.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(department) = &self.department {
            params.push(("department", department.clone()));
        }
        for key in &self.building_keys {
            params.push(("building_keys", key.clone()));
        }
        params
    }
}

/// Parameters for the allocations endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationsQuery {
    pub start_date: NaiveDate,
    /// Defaults to `start_date` when unset.
    pub end_date: Option<NaiveDate>,
    pub start_time: WallTime,
    pub department: Option<String>,
    /// The allocations endpoint filters by building through its `name`
    /// parameter.
    pub building_key: Option<String>,
}

impl AllocationsQuery {
    /// A single-day query starting at the given instant.
    pub fn new(start_date: NaiveDate, start_time: WallTime) -> Self {
        Self {
            start_date,
            end_date: None,
            start_time,
            department: None,
            building_key: None,
        }
    }

    /// Ordered key/value pairs for a transport to encode.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let end_date = self.end_date.unwrap_or(self.start_date);
        let mut params = vec![
            ("start_date", self.start_date.format("%Y-%m-%d").to_string()),
            ("end_date", end_date.format("%Y-%m-%d").to_string()),
            ("start_time", self.start_time.to_string()),
        ];
        if let Some(department) = &self.department {
            params.push(("department", department.clone()));
        }
        if let Some(building_key) = &self.building_key {
            params.push(("name", building_key.clone()));
        }
        params
    }
}

/// Fetch interface over the upstream directory.
///
/// Implementations own transport policy (timeouts, base URLs); any failure
/// (non-success status, timeout, undecodable body) surfaces as
/// [`ScoutError::Upstream`](crate::ScoutError::Upstream). The core never
/// retries.
pub trait DirectoryClient {
    fn fetch_rooms(&self, query: &RoomsQuery) -> Result<Vec<Room>>;

    fn fetch_allocations(&self, query: &AllocationsQuery) -> Result<Vec<Allocation>>;

    /// The exam schedule, for deployments that have one configured.
    /// The default implementation reports "not configured".
    fn fetch_exams(&self) -> Result<Option<Vec<ExamAppointment>>> {
        Ok(None)
    }
}
