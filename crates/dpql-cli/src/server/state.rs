//! Application state for the web server.

use dpql::Profiler;

/// Shared application state.
///
/// The profiler's registry is internally synchronized and snapshot-based, so
/// handlers share it without an outer lock.
#[derive(Clone)]
pub struct AppState {
    /// Parser and dataset registry shared by every request.
    pub profiler: Profiler,
}

impl AppState {
    /// Create new application state.
    pub fn new(profiler: Profiler) -> Self {
        Self { profiler }
    }

    /// Drop every registered dataset.
    pub fn clear(&self) -> Vec<String> {
        self.profiler.registry().remove_all()
    }
}
