//! Ground station pass scheduler.
//!
//! Tracks, per station, a timeline of reserved windows in which the station
//! is committed to an operating mode, and answers what mode is active at an
//! instant and which busy windows intersect a range.

pub mod config;
pub mod domain;
pub mod schedule;
pub mod web;
