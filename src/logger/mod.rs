//! Structured logging system for SolPack
//!
//! This module provides a clean, ergonomic logging API with:
//! - Automatic debug mode filtering from command-line arguments
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Colored console output
//!
//! ## Usage
//!
//! ```rust
//! use solpack::logger::{self, LogTag};
//!
//! // Level-specific functions
//! logger::error(LogTag::Api, "Connection failed");
//! logger::warning(LogTag::Api, "Upstream slow to respond");
//! logger::info(LogTag::System, "Server started");
//! logger::debug(LogTag::Analysis, "Aggregation details: ..."); // Only if --debug-analysis
//! ```
//!
//! ## Initialization
//!
//! Call once at startup (in main.rs), before any logging occurs:
//! ```rust
//! solpack::logger::init();
//! ```

mod config;
mod core;
mod format;
mod levels;
mod tags;

// Re-export public types
pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// This must be called once at application startup, before any logging
/// occurs. It parses command-line arguments for debug flags and configures
/// per-module debug modes and filtering rules.
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (detailed diagnostics)
///
/// Debug logs are ONLY shown when the matching --debug-<module> flag is
/// provided, e.g. `logger::debug(LogTag::Api, ...)` needs --debug-api.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (very detailed tracing)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
