//! Interval scheduling for ground stations.
//!
//! Each station owns a [`Timeline`] of reservations kept sorted by start,
//! with no two reservations overlapping or closer together than the
//! configured minimum gap. The [`StationRegistry`] routes operations to the
//! right timeline and serializes writes per station.

mod config;
mod error;
mod query;
mod registry;
mod scheduler;
mod timeline;

pub use config::ScheduleConfig;
pub use error::ScheduleError;
pub use registry::StationRegistry;
pub use scheduler::PassRequest;
pub use timeline::Timeline;
