//! Application state for the web layer.

use crate::schedule::StationRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Per-station timelines
    pub registry: StationRegistry,
}

impl AppState {
    /// Create a new app state.
    pub fn new(registry: StationRegistry) -> Self {
        Self { registry }
    }
}
