/// Axum webserver implementation
///
/// Main server lifecycle management including startup, shutdown, and graceful
/// termination
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    analysis::Analyzer,
    config::WebserverConfig,
    errors::{ConfigurationError, NetworkError, SolPackError},
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// This function blocks until the server is shut down
pub async fn start_server(
    config: &WebserverConfig,
    analyzer: Arc<Analyzer>,
) -> Result<(), SolPackError> {
    logger::debug(
        LogTag::Webserver,
        &format!("Starting webserver on {}:{}", config.host, config.port),
    );

    // Create application state
    let state = Arc::new(AppState::new(analyzer));

    // Build the router
    let app = build_app(state);

    // Parse bind address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| {
            SolPackError::Configuration(ConfigurationError::InvalidConfig {
                field: "webserver".to_string(),
                reason: format!("Invalid bind address: {}", e),
            })
        })?;

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        // Provide helpful error message for common cases
        let reason = match e.kind() {
            std::io::ErrorKind::AddrInUse => "Address already in use\n\
                 \n\
                 This usually means another instance of solpack is running.\n\
                 To verify and stop other instances:\n\
                   1. Check: ps aux | grep solpack | grep -v grep\n\
                   2. Stop: pkill -f solpack"
                .to_string(),
            std::io::ErrorKind::PermissionDenied => format!(
                "Permission denied\n\
                 \n\
                 Port {} requires elevated privileges on this system.\n\
                 Consider using a port above 1024 or running with appropriate permissions.",
                config.port
            ),
            _ => e.to_string(),
        };
        SolPackError::Network(NetworkError::BindFailed {
            address: addr.to_string(),
            reason,
        })
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("🌐 Webserver listening on http://{}", addr),
    );
    logger::info(
        LogTag::Webserver,
        &format!("📊 API endpoint: http://{}/api/analyze/:address", addr),
    );

    // Run the server with graceful shutdown
    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::debug(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| SolPackError::network_error(format!("Server error: {}", e)))?;

    logger::info(LogTag::Webserver, "✅ Webserver stopped gracefully");

    Ok(())
}

/// Trigger webserver shutdown
pub fn shutdown() {
    logger::debug(LogTag::Webserver, "Triggering webserver shutdown...");
    SHUTDOWN_NOTIFY.notify_one();
}

/// Build the Axum application with all routes and middleware
fn build_app(state: Arc<AppState>) -> Router {
    let app = routes::create_router(state);

    // The card front-end is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors)
}
