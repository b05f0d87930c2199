/// Shared application state for the webserver
///
/// Contains the aggregation engine and shared resources that route handlers
/// need. All request data is otherwise request-local.
use std::sync::Arc;

use crate::analysis::Analyzer;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// The aggregation engine, safe to share across requests
    pub analyzer: Arc<Analyzer>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        Self {
            analyzer,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
