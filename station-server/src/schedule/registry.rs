//! Station lookup and per-station locking.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::{BusyInterval, Reservation, StationId, StationState};

use super::config::ScheduleConfig;
use super::error::ScheduleError;
use super::scheduler::PassRequest;
use super::timeline::Timeline;

/// Thread-safe mapping from station to its timeline.
///
/// The set of stations is fixed at construction. Each timeline sits behind
/// its own reader-writer lock: scheduling holds the write lock across
/// validation and insertion, queries take the read lock, and operations on
/// different stations never contend.
#[derive(Clone)]
pub struct StationRegistry {
    stations: Arc<HashMap<StationId, RwLock<Timeline>>>,
    config: Arc<ScheduleConfig>,
}

impl StationRegistry {
    /// Create a registry with an empty timeline for each station.
    pub fn new(stations: impl IntoIterator<Item = StationId>, config: ScheduleConfig) -> Self {
        let stations = stations
            .into_iter()
            .map(|id| (id, RwLock::new(Timeline::new())))
            .collect();

        Self {
            stations: Arc::new(stations),
            config: Arc::new(config),
        }
    }

    /// The scheduling rules applied to every station.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Whether `station` is one of the configured stations.
    pub fn contains(&self, station: &str) -> bool {
        self.stations.contains_key(station)
    }

    /// Configured station identifiers, sorted.
    pub fn station_ids(&self) -> Vec<&StationId> {
        let mut ids: Vec<_> = self.stations.keys().collect();
        ids.sort();
        ids
    }

    /// Validate and commit a reservation on `station`.
    pub async fn schedule_pass(
        &self,
        station: &str,
        request: PassRequest,
    ) -> Result<Reservation, ScheduleError> {
        let timeline = self.timeline(station)?;
        let mut guard = timeline.write().await;

        match guard.schedule(request, &self.config) {
            Ok(reservation) => {
                info!(
                    station,
                    window = %reservation.window(),
                    mode = %reservation.mode(),
                    mission = reservation.mission(),
                    reservations = guard.len(),
                    "Scheduled pass"
                );
                Ok(reservation)
            }
            Err(e) => {
                debug!(station, error = %e, "Rejected pass");
                Err(e)
            }
        }
    }

    /// The mode and mission in effect on `station` at `t`.
    pub async fn query_state_at(
        &self,
        station: &str,
        t: NaiveDateTime,
    ) -> Result<StationState, ScheduleError> {
        let guard = self.timeline(station)?.read().await;
        Ok(guard.state_at(t))
    }

    /// Busy intervals on `station` intersecting `[from, to)`.
    pub async fn query_busy_times(
        &self,
        station: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<BusyInterval>, ScheduleError> {
        let guard = self.timeline(station)?.read().await;
        Ok(guard.busy_times(from, to))
    }

    /// A snapshot of every reservation on `station`, in start order.
    pub async fn reservations(&self, station: &str) -> Result<Vec<Reservation>, ScheduleError> {
        let guard = self.timeline(station)?.read().await;
        Ok(guard.iter().cloned().collect())
    }

    fn timeline(&self, station: &str) -> Result<&RwLock<Timeline>, ScheduleError> {
        self.stations
            .get(station)
            .ok_or_else(|| ScheduleError::InvalidStation(station.to_string()))
    }
}
