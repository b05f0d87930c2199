/// Core logging implementation with automatic filtering
///
/// This module contains the central logging logic that:
/// - Checks if a log should be displayed based on level and tag
/// - Delegates to the format module for output
/// - Implements the filtering rules

use super::config::{get_logger_config, is_debug_enabled_for_tag, is_verbose_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Debug level passes when --debug-<module> was given for that tag
/// 3. Verbose level passes when --verbose-<module> was given for that tag
/// 4. Everything else is checked against the minimum level threshold
/// 5. If enabled_tags is non-empty, tag must be in the set
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    // Rule 1: Errors always log (critical)
    if level == LogLevel::Error {
        return true;
    }

    // Rules 2 + 3: per-module flags open Debug/Verbose regardless of threshold
    if level == LogLevel::Debug && is_debug_enabled_for_tag(tag) {
        return true;
    }
    if level == LogLevel::Verbose && is_verbose_enabled_for_tag(tag) {
        return true;
    }

    // Rule 4: check minimum level threshold
    if level > config.min_level {
        return false;
    }

    // Rule 5: check if tag is enabled (empty set = all enabled)
    if !config.enabled_tags.is_empty() {
        let tag_name = tag.to_debug_key();
        if !config.enabled_tags.contains(&tag_name) {
            return false;
        }
    }

    true
}

/// Internal logging function with automatic filtering
///
/// This checks if the log should be displayed, then delegates to
/// the format module for formatting and writing.
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    // Check if we should log this message
    if !should_log(&tag, level) {
        return;
    }

    // Delegate to format module for formatting and writing
    super::format::format_and_log(tag, level.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::config::{set_logger_config, LoggerConfig, TEST_CONFIG_LOCK};

    #[test]
    fn test_errors_always_log() {
        let _guard = TEST_CONFIG_LOCK.lock().unwrap();

        set_logger_config(LoggerConfig {
            min_level: LogLevel::Error,
            ..LoggerConfig::default()
        });
        assert!(should_log(&LogTag::System, LogLevel::Error));
        assert!(!should_log(&LogTag::System, LogLevel::Info));
        set_logger_config(LoggerConfig::default());
    }

    #[test]
    fn test_debug_requires_module_flag() {
        let _guard = TEST_CONFIG_LOCK.lock().unwrap();

        let mut config = LoggerConfig::default();
        config.debug_tags.insert("analysis".to_string());
        set_logger_config(config);

        assert!(should_log(&LogTag::Analysis, LogLevel::Debug));
        assert!(!should_log(&LogTag::Webserver, LogLevel::Debug));

        set_logger_config(LoggerConfig::default());
    }

    #[test]
    fn test_verbose_threshold_opens_everything() {
        let _guard = TEST_CONFIG_LOCK.lock().unwrap();

        set_logger_config(LoggerConfig {
            min_level: LogLevel::Verbose,
            ..LoggerConfig::default()
        });
        assert!(should_log(&LogTag::Api, LogLevel::Debug));
        assert!(should_log(&LogTag::Api, LogLevel::Verbose));
        set_logger_config(LoggerConfig::default());
    }
}
