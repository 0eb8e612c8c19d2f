//! Request validation and fetch orchestration.
//!
//! [`AvailabilityService`] is what a transport layer calls: it validates the
//! raw query parameters, scopes the directory queries by location, fetches
//! rooms and allocations, folds in the exam schedule when the client has one,
//! and runs the availability pipeline. One request is one synchronous pass;
//! nothing is shared or cached between calls.

use chrono::NaiveDate;

use crate::directory::{AllocationsQuery, DirectoryClient, RoomsQuery};
use crate::error::{Result, ScoutError};
use crate::exams;
use crate::exclusion::ExclusionRules;
use crate::locations::LocationDirectory;
use crate::pipeline::{self, RoomAvailability};
use crate::wallclock::WallTime;

/// A validated free-room request.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityRequest {
    pub start_date: NaiveDate,
    pub start_time: WallTime,
    pub min_size: Option<u32>,
    pub location: Option<String>,
    pub building_key: Option<String>,
}

impl AvailabilityRequest {
    /// Validate raw query parameters.
    ///
    /// # Errors
    /// Returns [`ScoutError::InvalidDate`] / [`ScoutError::InvalidTime`] for
    /// malformed values; the requested instant must lie within the day, so
    /// `24:00` is rejected here even though allocation end times allow it.
    pub fn parse(
        start_date: &str,
        start_time: &str,
        min_size: Option<u32>,
        location: Option<&str>,
        building_key: Option<&str>,
    ) -> Result<Self> {
        let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|_| ScoutError::InvalidDate(start_date.to_string()))?;
        let start_time = WallTime::parse(start_time)?;
        if start_time.hour() > 23 {
            return Err(ScoutError::InvalidTime(start_time.to_string()));
        }
        Ok(Self {
            start_date,
            start_time,
            min_size,
            location: location.map(str::to_string),
            building_key: building_key.map(str::to_string),
        })
    }
}

/// The free-room lookup, generic over the directory transport.
pub struct AvailabilityService<C> {
    client: C,
    rules: ExclusionRules,
    locations: LocationDirectory,
}

impl<C: DirectoryClient> AvailabilityService<C> {
    /// A service with the standard exclusion rules and location map.
    pub fn new(client: C) -> Self {
        Self {
            client,
            rules: ExclusionRules::default(),
            locations: LocationDirectory::default(),
        }
    }

    pub fn with_rules(mut self, rules: ExclusionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_locations(mut self, locations: LocationDirectory) -> Self {
        self.locations = locations;
        self
    }

    pub fn locations(&self) -> &LocationDirectory {
        &self.locations
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// The rooms free at the requested instant, sorted by short label.
    ///
    /// A `location` narrows the rooms query to that location's buildings
    /// (unknown names are an error, not an empty filter); otherwise an
    /// explicit `building_key` narrows to a single building. The two
    /// upstream fetches are independent of each other, but both must succeed
    /// before any room is evaluated.
    ///
    /// # Errors
    /// [`ScoutError::UnknownLocation`] for an unmapped location name,
    /// [`ScoutError::Upstream`](crate::ScoutError::Upstream) when a fetch
    /// fails.
    pub fn free_rooms(&self, request: &AvailabilityRequest) -> Result<Vec<RoomAvailability>> {
        let building_keys: Vec<String> = match &request.location {
            Some(name) => self.locations.resolve(name)?.to_vec(),
            None => request.building_key.iter().cloned().collect(),
        };

        let rooms = self.client.fetch_rooms(&RoomsQuery::for_buildings(building_keys))?;
        let mut allocations = self
            .client
            .fetch_allocations(&AllocationsQuery::new(request.start_date, request.start_time))?;

        if let Some(exam_schedule) = self.client.fetch_exams()? {
            allocations.extend(exams::exam_allocations(
                &exam_schedule,
                request.start_date,
                &rooms,
            ));
        }

        Ok(pipeline::compute_free_rooms(
            &rooms,
            &allocations,
            request.start_time,
            request.min_size,
            &self.rules,
        ))
    }
}
