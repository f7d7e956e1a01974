//! Point and range queries over a timeline.

use chrono::NaiveDateTime;

use crate::domain::{BusyInterval, StationState};

use super::timeline::Timeline;

impl Timeline {
    /// The mode and mission in effect at `t`.
    ///
    /// Reservation bounds are inclusive. When nothing covers `t` the station
    /// is free with the default mission.
    pub fn state_at(&self, t: NaiveDateTime) -> StationState {
        self.iter()
            .take_while(|r| r.start() <= t)
            .find(|r| r.window().contains(t))
            .map(StationState::from)
            .unwrap_or_else(StationState::free)
    }

    /// Busy reservations intersecting `[from, to)`, clipped to the range.
    ///
    /// Zero-length intersections are dropped, so an empty or inverted range
    /// yields nothing. Results are in ascending start order.
    pub fn busy_times(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<BusyInterval> {
        self.iter()
            .take_while(|r| r.start() < to)
            .filter(|r| r.mode().is_busy())
            .filter_map(|r| {
                r.window().clip(from, to).map(|window| BusyInterval {
                    window,
                    mode: r.mode(),
                })
            })
            .collect()
    }
}
