//! Validation and insertion of new reservations.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{DEFAULT_MISSION, OperatingMode, Reservation, TimeWindow};

use super::config::ScheduleConfig;
use super::error::ScheduleError;
use super::timeline::Timeline;

/// A candidate reservation, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassRequest {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub mode: OperatingMode,
    /// Defaults to [`DEFAULT_MISSION`] when absent.
    pub mission: Option<String>,
}

impl PassRequest {
    /// Create a request with no mission label.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, mode: OperatingMode) -> Self {
        Self {
            start,
            end,
            mode,
            mission: None,
        }
    }

    /// Attach a mission label.
    pub fn with_mission(mut self, mission: impl Into<String>) -> Self {
        self.mission = Some(mission.into());
        self
    }
}

impl Timeline {
    /// Validate a candidate and commit it to the timeline.
    ///
    /// Checks run in order, all before any mutation:
    /// 1. the mode must be a busy mode (`free` cannot be reserved);
    /// 2. the window must start strictly before it ends;
    /// 3. neither the candidate's start nor its end may fall within the
    ///    minimum gap of, respectively, any existing end or start;
    /// 4. the candidate must not overlap any existing reservation.
    ///
    /// On success returns a copy of the stored reservation.
    pub fn schedule(
        &mut self,
        request: PassRequest,
        config: &ScheduleConfig,
    ) -> Result<Reservation, ScheduleError> {
        let window = self.validate(&request, config)?;
        let mission = request
            .mission
            .unwrap_or_else(|| DEFAULT_MISSION.to_string());
        let reservation = Reservation::new(window, request.mode, mission);
        self.insert(reservation.clone());
        Ok(reservation)
    }

    /// Run the checks of [`Timeline::schedule`] without committing.
    pub fn validate(
        &self,
        request: &PassRequest,
        config: &ScheduleConfig,
    ) -> Result<TimeWindow, ScheduleError> {
        if !request.mode.is_busy() {
            return Err(ScheduleError::InvalidMode(request.mode.to_string()));
        }

        let window = TimeWindow::new(request.start, request.end)
            .map_err(|e| ScheduleError::InvalidRange(e.to_string()))?;

        let gap = config.min_gap();
        if let Some(existing) = self.iter().find(|r| {
            within(window.start(), r.end(), gap) || within(window.end(), r.start(), gap)
        }) {
            return Err(ScheduleError::InsufficientGap {
                existing: existing.window(),
                min_gap_secs: config.min_gap_secs,
            });
        }

        if let Some(existing) = self.iter().find(|r| window.overlaps(&r.window())) {
            return Err(ScheduleError::Overlap {
                existing: existing.window(),
            });
        }

        Ok(window)
    }
}

/// Whether `a` and `b` are strictly less than `gap` apart, in either direction.
fn within(a: NaiveDateTime, b: NaiveDateTime, gap: Duration) -> bool {
    let d = a.signed_duration_since(b);
    d < gap && d > -gap
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::parse_timestamp;
    use proptest::prelude::*;

    fn base() -> NaiveDateTime {
        parse_timestamp("2024-03-15T00:00:00").unwrap()
    }

    fn mode() -> impl Strategy<Value = OperatingMode> {
        prop_oneof![
            Just(OperatingMode::ScienceBusy),
            Just(OperatingMode::TelemetryBusy),
            Just(OperatingMode::BothBusy),
        ]
    }

    /// Candidate passes: (start offset secs, duration secs, mode).
    fn candidates() -> impl Strategy<Value = Vec<(i64, i64, OperatingMode)>> {
        prop::collection::vec((0i64..86_400, 1i64..7_200, mode()), 0..40)
    }

    fn build(candidates: &[(i64, i64, OperatingMode)]) -> Timeline {
        let config = ScheduleConfig::default();
        let mut timeline = Timeline::new();
        for &(offset, len, mode) in candidates {
            let start = base() + Duration::seconds(offset);
            let end = start + Duration::seconds(len);
            let _ = timeline.schedule(PassRequest::new(start, end, mode), &config);
        }
        timeline
    }

    proptest! {
        /// Accepted reservations never overlap and keep the minimum gap
        #[test]
        fn accepted_reservations_are_separated(cs in candidates()) {
            let timeline = build(&cs);
            let all: Vec<_> = timeline.iter().collect();
            let gap = ScheduleConfig::default().min_gap();
            for (i, a) in all.iter().enumerate() {
                for b in &all[i + 1..] {
                    prop_assert!(!a.window().overlaps(&b.window()));
                    let separation = if a.end() <= b.start() {
                        b.start() - a.end()
                    } else {
                        a.start() - b.end()
                    };
                    prop_assert!(separation >= gap);
                }
            }
        }

        /// The timeline is sorted by start after any sequence of inserts
        #[test]
        fn timeline_stays_sorted(cs in candidates()) {
            let timeline = build(&cs);
            let starts: Vec<_> = timeline.iter().map(|r| r.start()).collect();
            prop_assert!(starts.windows(2).all(|w| w[0] <= w[1]));
        }

        /// A rejected candidate leaves the timeline unchanged
        #[test]
        fn rejection_leaves_timeline_unchanged(
            cs in candidates(),
            offset in 0i64..86_400,
            len in 1i64..7_200,
        ) {
            let mut timeline = build(&cs);
            let before: Vec<_> = timeline.iter().cloned().collect();
            let start = base() + Duration::seconds(offset);
            let request = PassRequest::new(start, start + Duration::seconds(len), OperatingMode::BothBusy);
            if timeline.schedule(request, &ScheduleConfig::default()).is_err() {
                let after: Vec<_> = timeline.iter().cloned().collect();
                prop_assert_eq!(before, after);
            } else {
                prop_assert_eq!(timeline.len(), before.len() + 1);
            }
        }
    }
}
