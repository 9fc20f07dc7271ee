pub mod config;
pub mod date;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::ServerConfig;
use store::TaskStore;

/// Shared application state passed to every route handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// Task persistence — Firebase in production, in-memory when no
    /// database URL is configured (dev mode) and in tests.
    pub store: Arc<dyn TaskStore>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: Arc<ServerConfig>, store: Arc<dyn TaskStore>) -> Self {
        Self {
            config,
            store,
            started_at: std::time::Instant::now(),
        }
    }
}
