//! Scheduling error types.
//!
//! Every variant is a validation failure detected before any mutation, so
//! the timeline is unchanged and the caller may retry with corrected input.

use crate::domain::{InvalidMode, TimeWindow};

/// Errors returned by the scheduling core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Station identifier is not one of the configured stations
    #[error("{0} not a valid station")]
    InvalidStation(String),

    /// Mode is unrecognized, or cannot be reserved
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// Candidate window intersects an existing reservation
    #[error("time window overlaps with an existing pass ({existing})")]
    Overlap { existing: TimeWindow },

    /// Candidate window is too close to an existing reservation
    #[error(
        "pass is too close to an existing reservation ({existing}); minimum gap is {min_gap_secs}s"
    )]
    InsufficientGap {
        existing: TimeWindow,
        min_gap_secs: i64,
    },

    /// Time range is malformed or inverted
    #[error("invalid time range: {0}")]
    InvalidRange(String),
}

impl From<InvalidMode> for ScheduleError {
    fn from(e: InvalidMode) -> Self {
        ScheduleError::InvalidMode(e.name().to_string())
    }
}
