//! Station operating modes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid mode: {name}")]
pub struct InvalidMode {
    name: String,
}

impl InvalidMode {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// What a station is committed to during a reservation.
///
/// `Free` is the implicit state whenever no reservation covers an instant;
/// it is never stored in a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    Free,
    ScienceBusy,
    TelemetryBusy,
    BothBusy,
}

impl OperatingMode {
    /// Every mode, in declaration order.
    pub const ALL: [OperatingMode; 4] = [
        OperatingMode::Free,
        OperatingMode::ScienceBusy,
        OperatingMode::TelemetryBusy,
        OperatingMode::BothBusy,
    ];

    /// Parse a mode from its wire name (e.g. `science_busy`).
    ///
    /// # Examples
    ///
    /// ```
    /// use station_server::domain::OperatingMode;
    ///
    /// assert_eq!(
    ///     OperatingMode::parse("telemetry_busy").unwrap(),
    ///     OperatingMode::TelemetryBusy
    /// );
    /// assert!(OperatingMode::parse("TelemetryBusy").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| InvalidMode {
                name: s.to_string(),
            })
    }

    /// Returns the wire name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Free => "free",
            OperatingMode::ScienceBusy => "science_busy",
            OperatingMode::TelemetryBusy => "telemetry_busy",
            OperatingMode::BothBusy => "both_busy",
        }
    }

    /// Whether the station is committed to something in this mode.
    pub fn is_busy(&self) -> bool {
        !matches!(self, OperatingMode::Free)
    }
}

impl FromStr for OperatingMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
