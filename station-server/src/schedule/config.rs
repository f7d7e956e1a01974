//! Scheduling rules.

use chrono::Duration;

/// Configuration parameters for accepting reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Minimum separation between any two reservations on one station (seconds).
    /// Passes closer together than this are rejected even if they do not overlap.
    pub min_gap_secs: i64,
}

impl ScheduleConfig {
    /// Create a new configuration with the given minimum gap.
    pub fn new(min_gap_secs: i64) -> Self {
        Self { min_gap_secs }
    }

    /// Returns the minimum gap as a Duration.
    ///
    /// Values too large for a Duration saturate to the largest one.
    pub fn min_gap(&self) -> Duration {
        Duration::try_seconds(self.min_gap_secs).unwrap_or(Duration::MAX)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            min_gap_secs: 300, // 5 minutes
        }
    }
}
