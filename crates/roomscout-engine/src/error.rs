//! Error types for room availability resolution.

use thiserror::Error;

/// Errors that can occur while resolving free rooms.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// A wall-clock value was not a valid `HH:MM` string.
    #[error("invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// A date parameter was not a valid `YYYY-MM-DD` string.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The requested location name is not in the location directory.
    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    /// An upstream directory fetch failed (non-success status, timeout,
    /// or undecodable payload). The endpoint names which fetch failed.
    #[error("upstream {endpoint} request failed: {reason}")]
    Upstream {
        endpoint: &'static str,
        reason: String,
    },
}

/// Convenience alias used throughout roomscout-engine.
pub type Result<T> = std::result::Result<T, ScoutError>;
