/// Centralized argument handling system for SolPack
///
/// This module consolidates all command-line argument parsing and debug flag
/// checking functionality used across the application and the debug binaries.
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for all modules
/// - Unified argument parsing utilities
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by binaries and tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// These functions check for specific debug flags in the command-line arguments
// =============================================================================

/// API calls debug mode
pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api")
}

/// Aggregation engine debug mode
pub fn is_debug_analysis_enabled() -> bool {
    has_arg("--debug-analysis")
}

/// Webserver debug mode
pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

/// Ecosystem registry debug mode
pub fn is_debug_ecosystems_enabled() -> bool {
    has_arg("--debug-ecosystems")
}

/// Global verbose mode
pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose")
}

/// Quiet mode suppresses everything below warnings
pub fn is_quiet_enabled() -> bool {
    has_arg("--quiet")
}

// =============================================================================
// ARGUMENT PATTERNS
// =============================================================================

pub mod patterns {
    use super::has_arg;

    /// Check if help was requested
    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }
}

/// Path to the JSON config file (defaults to config.json in the working directory)
pub fn get_config_path() -> String {
    get_arg_value("--config").unwrap_or_else(|| "config.json".to_string())
}

/// Print enabled debug modes at startup so log output is explainable
pub fn print_debug_info() {
    let flags = [
        ("--debug-api", is_debug_api_enabled()),
        ("--debug-analysis", is_debug_analysis_enabled()),
        ("--debug-webserver", is_debug_webserver_enabled()),
        ("--debug-ecosystems", is_debug_ecosystems_enabled()),
        ("--verbose", is_verbose_enabled()),
    ];

    let enabled: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();

    if !enabled.is_empty() {
        crate::logger::info(
            crate::logger::LogTag::System,
            &format!("Debug modes enabled: {}", enabled.join(", ")),
        );
    }
}

/// Print command-line help text
pub fn print_help() {
    println!("SolPack API - Solana wallet card analysis service");
    println!();
    println!("USAGE:");
    println!("  solpack [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --config <path>       Path to config file (default: config.json)");
    println!("  --quiet               Only show warnings and errors");
    println!("  --verbose             Show verbose trace output");
    println!("  --debug-api           Debug logs for upstream API calls");
    println!("  --debug-analysis      Debug logs for the aggregation engine");
    println!("  --debug-webserver     Debug logs for HTTP handling");
    println!("  --debug-ecosystems    Debug logs for ecosystem matching");
    println!("  -h, --help            Show this help text");
    println!();
    println!("ENDPOINTS:");
    println!("  GET /health                  Liveness probe");
    println!("  GET /api/analyze/:address    Wallet analysis card data");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_arg_value_reads_following_token() {
        set_cmd_args(vec![
            "solpack".to_string(),
            "--config".to_string(),
            "custom.json".to_string(),
        ]);
        assert_eq!(get_arg_value("--config"), Some("custom.json".to_string()));
        assert_eq!(get_config_path(), "custom.json");
        set_cmd_args(vec!["solpack".to_string()]);
    }

    #[test]
    fn test_get_arg_value_missing_flag() {
        assert_eq!(get_arg_value("--no-such-flag"), None);
    }
}
