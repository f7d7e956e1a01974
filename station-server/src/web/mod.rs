//! Web layer for the station scheduler.
//!
//! Provides HTTP endpoints for scheduling passes and querying station
//! timelines. Handlers only parse and format; all rules live in
//! [`crate::schedule`].

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
