use std::sync::Arc;

use solpack::{
    analysis::Analyzer,
    apis::helius::HeliusClient,
    arguments::{get_config_path, patterns, print_debug_info, print_help},
    config::Config,
    ecosystems::EcosystemRegistry,
    logger::{self, LogTag},
};

/// Main entry point for the SolPack API
///
/// Startup order matters: the logger comes first so every later failure is
/// reported through it, then configuration, then the webserver which blocks
/// until shutdown.
#[tokio::main]
async fn main() {
    // Initialize logger system before anything else logs
    logger::init();

    // Check for help request first (before any other processing)
    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 SolPack API starting up...");

    // Print debug information if any debug modes are enabled
    print_debug_info();

    // Load configuration; a missing API key is a hard startup failure
    let config_path = get_config_path();
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::Config, &format!("❌ Failed to load config: {}", e));
            std::process::exit(1);
        }
    };
    logger::info(
        LogTag::Config,
        &format!("Configuration loaded from {}", config_path),
    );

    // Build the ecosystem registry once and inject it everywhere
    let registry = Arc::new(EcosystemRegistry::builtin());
    logger::info(
        LogTag::Ecosystems,
        &format!("Ecosystem registry loaded: {} protocols", registry.len()),
    );

    // Upstream client and aggregation engine
    let helius = match HeliusClient::new(&config.helius) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            logger::error(LogTag::Api, &format!("❌ Failed to create Helius client: {}", e));
            std::process::exit(1);
        }
    };
    let analyzer = Arc::new(Analyzer::new(
        helius,
        registry,
        config.analysis.holdings_ranking,
    ));

    // Ctrl-C triggers a graceful webserver shutdown
    if let Err(e) = ctrlc::set_handler(|| {
        solpack::webserver::server::shutdown();
    }) {
        logger::warning(
            LogTag::System,
            &format!("Failed to install Ctrl-C handler: {}", e),
        );
    }

    match solpack::webserver::server::start_server(&config.webserver, analyzer).await {
        Ok(_) => {
            logger::info(LogTag::System, "✅ SolPack API stopped cleanly");
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ SolPack API failed: {}", e));
            std::process::exit(1);
        }
    }
}
