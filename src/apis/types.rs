/// Shared types for upstream API clients
///
/// Wire payloads from a concrete provider are normalized into the records in
/// this module at the client boundary, so the aggregation engine never sees
/// provider-specific JSON shapes.

// ============================================================================
// API ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NetworkError(String),
    InvalidResponse(String),
    NotFound,
    Timeout,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::Timeout => write!(f, "Request timeout"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(err: ApiError) -> String {
        err.to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }
}

// ============================================================================
// NORMALIZED RECORDS
// ============================================================================

/// One wallet transaction, reduced to what the aggregation engine needs:
/// when it happened and which programs it touched.
#[derive(Debug, Clone, Default)]
pub struct RawTransaction {
    /// Unix timestamp in seconds
    pub timestamp: i64,
    /// Accounts referenced by the transaction
    pub account_keys: Vec<String>,
    /// Program ids invoked by the transaction's instructions
    pub instruction_programs: Vec<String>,
}

impl RawTransaction {
    /// All program identifiers the transaction may have touched, account
    /// keys and instruction programs combined (duplicates included)
    pub fn involved_programs(&self) -> impl Iterator<Item = &str> {
        self.account_keys
            .iter()
            .map(String::as_str)
            .chain(self.instruction_programs.iter().map(String::as_str))
    }
}

/// One token position held by the wallet
#[derive(Debug, Clone)]
pub struct RawAsset {
    pub mint: String,
    /// NFTs and other non-fungible positions are excluded from holdings
    pub fungible: bool,
    /// Raw integer amount before decimal scaling
    pub raw_amount: u64,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
    /// Best-effort USD valuation passed through from the provider
    pub usd_value: Option<f64>,
}

impl RawAsset {
    /// Human-readable amount, raw amount scaled by the token's decimals
    pub fn ui_amount(&self) -> f64 {
        self.raw_amount as f64 / 10f64.powi(self.decimals as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_amount_scales_by_decimals() {
        let asset = RawAsset {
            mint: "mint".to_string(),
            fungible: true,
            raw_amount: 5_000_000_000,
            decimals: 9,
            symbol: None,
            name: None,
            usd_value: None,
        };
        assert_eq!(asset.ui_amount(), 5.0);
    }

    #[test]
    fn test_ui_amount_zero_decimals() {
        let asset = RawAsset {
            mint: "mint".to_string(),
            fungible: true,
            raw_amount: 42,
            decimals: 0,
            symbol: None,
            name: None,
            usd_value: None,
        };
        assert_eq!(asset.ui_amount(), 42.0);
    }

    #[test]
    fn test_involved_programs_chains_both_sources() {
        let tx = RawTransaction {
            timestamp: 0,
            account_keys: vec!["a".to_string(), "b".to_string()],
            instruction_programs: vec!["c".to_string()],
        };
        let programs: Vec<&str> = tx.involved_programs().collect();
        assert_eq!(programs, vec!["a", "b", "c"]);
    }
}
