use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::analysis::HoldingsRanking;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub helius: HeliusConfig,
    #[serde(default)]
    pub webserver: WebserverConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeliusConfig {
    /// Helius API key; may also come from the HELIUS_API_KEY environment variable
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_helius_base_url")]
    pub base_url: String,
    /// Per-request timeout; an expired timeout counts as a failed fetch
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Single-page transaction history size
    #[serde(default = "default_transaction_page_limit")]
    pub transaction_page_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebserverConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    /// Ranking key for the top-holdings list
    #[serde(default)]
    pub holdings_ranking: HoldingsRanking,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub log_level: String,
}

fn default_helius_base_url() -> String {
    "https://api.helius.xyz/v0".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_transaction_page_limit() -> usize {
    1000
}

impl Default for HeliusConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_helius_base_url(),
            timeout_secs: default_timeout_secs(),
            transaction_page_limit: default_transaction_page_limit(),
        }
    }
}

impl Default for WebserverConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            helius: HeliusConfig::default(),
            webserver: WebserverConfig::default(),
            analysis: AnalysisConfig::default(),
            general: GeneralConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;

            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        } else {
            let default_config = Self::default();
            default_config.save(path)?;
            default_config
        };

        // The API key may live in the environment instead of the file
        if config.helius.api_key.is_empty() {
            if let Ok(key) = std::env::var("HELIUS_API_KEY") {
                config.helius.api_key = key;
            }
        }

        // Validate required fields
        if config.helius.api_key.is_empty() {
            return Err(anyhow::anyhow!(
                "helius.api_key is required in {} (or set HELIUS_API_KEY)",
                path
            ));
        }

        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .with_context(|| "Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.helius.base_url, "https://api.helius.xyz/v0");
        assert_eq!(config.helius.timeout_secs, 15);
        assert_eq!(config.helius.transaction_page_limit, 1000);
        assert_eq!(config.webserver.port, 3000);
        assert_eq!(config.analysis.holdings_ranking, HoldingsRanking::UsdValue);
    }

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{ "helius": { "api_key": "test-key" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.helius.api_key, "test-key");
        assert_eq!(config.webserver.host, "127.0.0.1");
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_parse_ranking_override() {
        let json = r#"{
            "helius": { "api_key": "k" },
            "analysis": { "holdings_ranking": "amount" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.analysis.holdings_ranking, HoldingsRanking::Amount);
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.helius.api_key = "abc".to_string();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.helius.api_key, "abc");
        assert_eq!(parsed.webserver.port, config.webserver.port);
    }
}
