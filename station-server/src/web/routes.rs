//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDateTime;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{OperatingMode, parse_timestamp};
use crate::schedule::{PassRequest, ScheduleError};

use super::dto::*;
use super::state::AppState;

/// Message returned for any timestamp that fails to parse.
const TIME_FORMAT_HINT: &str = "Invalid time format. Use 'YYYY-MM-DDTHH:MM:SS'.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/:station/schedule_pass/", post(schedule_pass))
        .route("/:station/query_state_at/:time", get(query_state_at))
        .route("/:station/query_busy_times/", get(query_busy_times))
        .route("/:station/reservations", get(list_reservations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List configured stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .registry
        .station_ids()
        .into_iter()
        .map(|id| id.to_string())
        .collect();

    Json(StationsResponse { stations })
}

/// Schedule a pass on a station.
async fn schedule_pass(
    State(state): State<AppState>,
    Path(station): Path<String>,
    body: Bytes,
) -> Result<Json<SchedulePassResponse>, AppError> {
    ensure_station(&state, &station)?;

    // Parse JSON manually so the error message is ours
    let req: SchedulePassRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        })?;

    let mode = OperatingMode::parse(&req.state).map_err(ScheduleError::from)?;
    let start = parse_time(&req.start_time)?;
    let end = parse_time(&req.end_time)?;

    let mut request = PassRequest::new(start, end, mode);
    if let Some(mission) = req.mission {
        request = request.with_mission(mission);
    }
    let reservation = state.registry.schedule_pass(&station, request).await?;

    Ok(Json(SchedulePassResponse {
        message: format!(
            "Scheduled pass at {station} to {} from {} to {} with mission {}",
            reservation.mode(),
            reservation.start(),
            reservation.end(),
            reservation.mission()
        ),
    }))
}

/// Report the mode and mission in effect at an instant.
async fn query_state_at(
    State(state): State<AppState>,
    Path((station, time)): Path<(String, String)>,
) -> Result<Json<StateAtResponse>, AppError> {
    ensure_station(&state, &station)?;
    let t = parse_time(&time)?;

    let current = state.registry.query_state_at(&station, t).await?;
    Ok(Json(current.into()))
}

/// List busy intervals within a range.
async fn query_busy_times(
    State(state): State<AppState>,
    Path(station): Path<String>,
    Query(query): Query<BusyTimesQuery>,
) -> Result<Json<BusyTimesResponse>, AppError> {
    ensure_station(&state, &station)?;

    let (Some(start), Some(end)) = (query.start_time, query.end_time) else {
        return Err(AppError::BadRequest {
            message: "Both 'start_time' and 'end_time' query parameters are required".to_string(),
        });
    };
    let from = parse_time(&start)?;
    let to = parse_time(&end)?;

    let busy = state.registry.query_busy_times(&station, from, to).await?;
    Ok(Json(BusyTimesResponse {
        busy_times: busy.iter().map(BusyTimeResult::from).collect(),
    }))
}

/// List every reservation on a station.
async fn list_reservations(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> Result<Json<ReservationsResponse>, AppError> {
    let reservations = state.registry.reservations(&station).await?;
    Ok(Json(ReservationsResponse {
        station,
        reservations: reservations.iter().map(ReservationResult::from).collect(),
    }))
}

/// Reject unknown stations before looking at the rest of the request.
fn ensure_station(state: &AppState, station: &str) -> Result<(), AppError> {
    if state.registry.contains(station) {
        Ok(())
    } else {
        Err(ScheduleError::InvalidStation(station.to_string()).into())
    }
}

fn parse_time(s: &str) -> Result<NaiveDateTime, AppError> {
    parse_timestamp(s)
        .map_err(|_| AppError::from(ScheduleError::InvalidRange(TIME_FORMAT_HINT.to_string())))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::InvalidStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
