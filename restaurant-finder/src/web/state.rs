//! Application state for the web layer.

use std::sync::Arc;

use crate::finder::RestaurantSource;
use crate::search::Orchestrator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Search orchestrator holding the one result set this server shows
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    /// Create a new app state searching `source`.
    pub fn new(source: Arc<dyn RestaurantSource>) -> Self {
        Self {
            orchestrator: Arc::new(Orchestrator::new(source)),
        }
    }
}
