//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::TransitPlanner;

/// Shared application state.
///
/// The planner owns the stop cache, so every request shares it.
pub struct AppState<S> {
    pub planner: Arc<TransitPlanner<S>>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(planner: TransitPlanner<S>) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

// Not derived: a derive would require `S: Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            planner: self.planner.clone(),
        }
    }
}
