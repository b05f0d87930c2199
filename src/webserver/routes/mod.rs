use axum::{routing::get, Router};
use std::sync::Arc;

use crate::webserver::state::AppState;

pub mod analyze;
pub mod status;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Top-level liveness probe, same handler as /api/health
        .route("/health", get(status::health_check))
        .nest("/api", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .merge(analyze::routes())
}
