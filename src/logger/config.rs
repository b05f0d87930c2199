/// Logger configuration derived from command-line arguments
///
/// Holds the minimum level threshold plus the per-module debug/verbose
/// flag sets parsed from --debug-<module> / --verbose-<module> arguments.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are filtered out (errors always pass)
    pub min_level: LogLevel,
    /// Module keys with --debug-<module> enabled
    pub debug_tags: HashSet<String>,
    /// Module keys with --verbose-<module> enabled
    pub verbose_tags: HashSet<String>,
    /// When non-empty, only these module keys are logged at all
    pub enabled_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            enabled_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Get a snapshot of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_default()
}

/// Replace the logger configuration (used by tests and init)
pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

/// Build the configuration from the global command-line arguments
///
/// Recognized arguments:
/// - `--quiet` sets the threshold to Warning
/// - `--verbose` sets the threshold to Verbose
/// - `--log-level <level>` sets an explicit threshold
/// - `--debug-<module>` enables Debug output for that module
/// - `--verbose-<module>` enables Verbose output for that module
pub fn init_from_args() {
    let args = crate::arguments::get_cmd_args();
    let mut config = LoggerConfig::default();

    if crate::arguments::is_quiet_enabled() {
        config.min_level = LogLevel::Warning;
    }
    if crate::arguments::is_verbose_enabled() {
        config.min_level = LogLevel::Verbose;
    }
    if let Some(level) = crate::arguments::get_arg_value("--log-level") {
        if let Some(parsed) = LogLevel::from_str(&level) {
            config.min_level = parsed;
        }
    }

    for arg in &args {
        if let Some(module) = arg.strip_prefix("--debug-") {
            config.debug_tags.insert(module.to_lowercase());
        } else if let Some(module) = arg.strip_prefix("--verbose-") {
            config.verbose_tags.insert(module.to_lowercase());
        }
    }

    set_logger_config(config);
}

/// Whether --debug-<module> was passed for this tag
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config().debug_tags.contains(&tag.to_debug_key())
}

/// Whether --verbose-<module> was passed for this tag
pub fn is_verbose_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config()
        .verbose_tags
        .contains(&tag.to_debug_key())
}

/// Serializes tests that touch the global logger configuration
#[cfg(test)]
pub(crate) static TEST_CONFIG_LOCK: Lazy<std::sync::Mutex<()>> =
    Lazy::new(|| std::sync::Mutex::new(()));
