//! Timestamps and time windows.
//!
//! All instants are timezone-naive local date-times. At the boundary they
//! are written as `YYYY-MM-DDTHH:MM:SS`.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// Wire format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimestampError {
    input: String,
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` timestamp.
///
/// # Examples
///
/// ```
/// use station_server::domain::{format_timestamp, parse_timestamp};
///
/// let t = parse_timestamp("2024-03-15T14:30:00").unwrap();
/// assert_eq!(format_timestamp(t), "2024-03-15T14:30:00");
///
/// assert!(parse_timestamp("2024-03-15 14:30:00").is_err());
/// assert!(parse_timestamp("2024-03-15T14:30").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimestampError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|_| TimestampError {
        input: s.to_string(),
    })
}

/// Format an instant as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Error returned when a window does not start strictly before it ends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("window start {start} must be before end {end}")]
pub struct InvalidWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// A non-empty time window `[start, end]`.
///
/// `start < end` is guaranteed by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    /// Create a window, rejecting empty or inverted ones.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, InvalidWindow> {
        if start >= end {
            return Err(InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start instant.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end instant.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the length of the window.
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Whether `t` lies within the window, both ends inclusive.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// Whether the two windows share more than a boundary instant.
    ///
    /// Windows that merely touch (`a.end == b.start`) are disjoint.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Clip this window to `[from, to]`.
    ///
    /// Returns `None` when the clipped window would be empty.
    pub fn clip(&self, from: NaiveDateTime, to: NaiveDateTime) -> Option<TimeWindow> {
        let start = self.start.max(from);
        let end = self.end.min(to);
        (start < end).then_some(TimeWindow { start, end })
    }
}

impl fmt::Debug for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeWindow({} .. {})", self.start, self.end)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            format_timestamp(self.start),
            format_timestamp(self.end)
        )
    }
}
