//! Shared application state for the Axum API server.

use std::sync::Arc;

use herald_common::config::AppConfig;
use herald_notifier::{Dispatcher, StrategyRegistry};

/// Application state shared across all route handlers via Axum `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Freeze `registry` and build the state around it.
    pub fn new(registry: StrategyRegistry, config: AppConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(Arc::new(registry)),
            config: Arc::new(config),
        }
    }
}
