//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{BusyInterval, Reservation, StationState, format_timestamp};

/// Request to schedule a pass.
#[derive(Debug, Deserialize)]
pub struct SchedulePassRequest {
    /// Start time, `YYYY-MM-DDTHH:MM:SS`
    pub start_time: String,

    /// End time, `YYYY-MM-DDTHH:MM:SS`
    pub end_time: String,

    /// Mode name (e.g. "science_busy")
    pub state: String,

    /// Mission label, defaults to "Idle"
    pub mission: Option<String>,
}

/// Response after scheduling a pass.
#[derive(Debug, Serialize)]
pub struct SchedulePassResponse {
    pub message: String,
}

/// Response for a point-in-time query.
#[derive(Debug, Serialize)]
pub struct StateAtResponse {
    /// Mode name
    pub state: String,

    /// Mission label
    pub mission: String,
}

impl From<StationState> for StateAtResponse {
    fn from(state: StationState) -> Self {
        Self {
            state: state.mode.to_string(),
            mission: state.mission,
        }
    }
}

/// Query parameters for a busy-times query.
///
/// Both are optional here so a missing one can be reported clearly.
#[derive(Debug, Deserialize)]
pub struct BusyTimesQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// A busy interval in a range query.
#[derive(Debug, Serialize)]
pub struct BusyTimeResult {
    pub start_time: String,
    pub end_time: String,
    pub state: String,
}

impl From<&BusyInterval> for BusyTimeResult {
    fn from(busy: &BusyInterval) -> Self {
        Self {
            start_time: format_timestamp(busy.start()),
            end_time: format_timestamp(busy.end()),
            state: busy.mode.to_string(),
        }
    }
}

/// Response for a busy-times query.
#[derive(Debug, Serialize)]
pub struct BusyTimesResponse {
    pub busy_times: Vec<BusyTimeResult>,
}

/// One stored reservation.
#[derive(Debug, Serialize)]
pub struct ReservationResult {
    pub start_time: String,
    pub end_time: String,
    pub state: String,
    pub mission: String,
}

impl From<&Reservation> for ReservationResult {
    fn from(r: &Reservation) -> Self {
        Self {
            start_time: format_timestamp(r.start()),
            end_time: format_timestamp(r.end()),
            state: r.mode().to_string(),
            mission: r.mission().to_string(),
        }
    }
}

/// Response listing a station's reservations.
#[derive(Debug, Serialize)]
pub struct ReservationsResponse {
    pub station: String,
    pub reservations: Vec<ReservationResult>,
}

/// Response listing configured stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
