/// Wallet analysis API route
///
/// The single request/response operation of the service: fetch, aggregate,
/// and return the card data for one wallet address.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::arguments::is_debug_webserver_enabled;
use crate::constants::{MAX_ADDRESS_LEN, MIN_ADDRESS_LEN};
use crate::logger::{self, LogTag};
use crate::webserver::models::responses::{AnalyzeResponse, ErrorResponse};
use crate::webserver::state::AppState;

/// Create analyze routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze/:address", get(analyze_wallet))
}

/// Length-only address validation; anything in the base58 length range passes
fn is_valid_address(address: &str) -> bool {
    (MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.len())
}

/// GET /api/analyze/:address
async fn analyze_wallet(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Response {
    if !is_valid_address(&address) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "Invalid Solana address",
                "Please provide a valid Solana wallet address",
            )),
        )
            .into_response();
    }

    if is_debug_webserver_enabled() {
        logger::debug(LogTag::Webserver, &format!("Analyzing wallet: {}", address));
    }

    // Aggregation runs in its own task so a panic on a malformed upstream
    // payload surfaces as a join error instead of tearing down the handler
    let analyzer = Arc::clone(&state.analyzer);
    let task_address = address.clone();
    let result = tokio::spawn(async move { analyzer.analyze(&task_address).await }).await;

    match result {
        Ok(analysis) => (StatusCode::OK, Json(AnalyzeResponse::new(analysis))).into_response(),
        Err(e) => {
            logger::error(
                LogTag::Webserver,
                &format!("Analysis failed for {}: {}", address, e),
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "Analysis failed",
                    "Failed to analyze wallet",
                )),
            )
                .into_response()
        }
    }
}
