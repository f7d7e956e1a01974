//! Reservations and the results of querying them.

use chrono::NaiveDateTime;

use super::{OperatingMode, TimeWindow};

/// Mission label used when none is supplied, and for free time.
pub const DEFAULT_MISSION: &str = "Idle";

/// A committed window during which a station operates in one mode.
///
/// Reservations are never mutated once accepted into a timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    window: TimeWindow,
    mode: OperatingMode,
    mission: String,
}

impl Reservation {
    /// Create a reservation.
    pub fn new(window: TimeWindow, mode: OperatingMode, mission: impl Into<String>) -> Self {
        Self {
            window,
            mode,
            mission: mission.into(),
        }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn start(&self) -> NaiveDateTime {
        self.window.start()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.window.end()
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    pub fn mission(&self) -> &str {
        &self.mission
    }
}

/// The mode and mission in effect at some instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationState {
    pub mode: OperatingMode,
    pub mission: String,
}

impl StationState {
    /// The state of a station with nothing scheduled.
    pub fn free() -> Self {
        Self {
            mode: OperatingMode::Free,
            mission: DEFAULT_MISSION.to_string(),
        }
    }
}

impl From<&Reservation> for StationState {
    fn from(r: &Reservation) -> Self {
        Self {
            mode: r.mode,
            mission: r.mission.clone(),
        }
    }
}

/// A busy stretch of a timeline, clipped to a query range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub window: TimeWindow,
    pub mode: OperatingMode,
}

impl BusyInterval {
    pub fn start(&self) -> NaiveDateTime {
        self.window.start()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.window.end()
    }
}
