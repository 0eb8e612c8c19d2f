//! Human-facing location names and the building keys behind them.

use crate::error::{Result, ScoutError};

/// Mapping from location names ("Feki") to the building-key tokens the
/// directory understands ("F21", "FG1", ...). Injected configuration;
/// [`LocationDirectory::default`] carries the standard campus map.
///
/// Entries keep insertion order so listings are stable.
#[derive(Debug, Clone)]
pub struct LocationDirectory {
    entries: Vec<(String, Vec<String>)>,
}

impl LocationDirectory {
    pub fn new<N, K>(entries: impl IntoIterator<Item = (N, Vec<K>)>) -> Self
    where
        N: Into<String>,
        K: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, keys)| (name.into(), keys.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// The building keys for a location name.
    ///
    /// # Errors
    /// Returns [`ScoutError::UnknownLocation`] for names not in the map;
    /// an unknown location is a caller mistake, not an empty filter.
    pub fn resolve(&self, location_name: &str) -> Result<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == location_name)
            .map(|(_, keys)| keys.as_slice())
            .ok_or_else(|| ScoutError::UnknownLocation(location_name.to_string()))
    }

    /// Known location names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Default for LocationDirectory {
    fn default() -> Self {
        Self::new([
            ("Erba", vec!["WE5"]),
            ("Feki", vec!["F21", "FG1", "FG2", "FMA"]),
            ("Markushaus", vec!["M3N", "M3", "MG1", "MG2"]),
            ("Innenstadt", vec!["U2", "U5", "U7"]),
        ])
    }
}
