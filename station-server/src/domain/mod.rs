//! Domain types for the ground station scheduler.
//!
//! This module contains the value types shared by the scheduling core and
//! the web layer. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod mode;
mod reservation;
mod station;
mod time;

pub use mode::{InvalidMode, OperatingMode};
pub use reservation::{BusyInterval, DEFAULT_MISSION, Reservation, StationState};
pub use station::{InvalidStationId, StationId};
pub use time::{
    InvalidWindow, TIMESTAMP_FORMAT, TimeWindow, TimestampError, format_timestamp, parse_timestamp,
};
