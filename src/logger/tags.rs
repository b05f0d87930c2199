/// Log tags identifying the subsystem a message originates from
///
/// Tags drive both console formatting and per-module debug gating:
/// a Debug-level message with tag X is only shown when --debug-<x> was
/// passed on the command line.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTag {
    System,
    Config,
    Api,
    Analysis,
    Ecosystems,
    Webserver,
    Test,
    Other(String),
}

impl LogTag {
    /// Key used for --debug-<key> / --verbose-<key> argument matching
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Api => "api".to_string(),
            LogTag::Analysis => "analysis".to_string(),
            LogTag::Ecosystems => "ecosystems".to_string(),
            LogTag::Webserver => "webserver".to_string(),
            LogTag::Test => "test".to_string(),
            LogTag::Other(s) => s.to_lowercase(),
        }
    }

    /// Uncolored tag text for plain output
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Api => "API".to_string(),
            LogTag::Analysis => "ANALYSIS".to_string(),
            LogTag::Ecosystems => "ECOSYS".to_string(),
            LogTag::Webserver => "WEBSERVER".to_string(),
            LogTag::Test => "TEST".to_string(),
            LogTag::Other(s) => s.to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_keys_are_lowercase() {
        assert_eq!(LogTag::Webserver.to_debug_key(), "webserver");
        assert_eq!(LogTag::Other("Helius".to_string()).to_debug_key(), "helius");
    }
}
