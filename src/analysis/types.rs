/// Wallet analysis record definitions
///
/// This is the JSON contract consumed by the card-rendering front-end, so
/// every field serializes in camelCase.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classification::WhaleTier;

/// The complete derived view of one wallet, built once per request from
/// freshly fetched data and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAnalysis {
    pub address: String,
    pub og_status: OgStatus,
    pub last_seen: LastSeen,
    pub whale_status: WhaleStatus,
    /// Up to 6 entries, SOL always first
    pub top_holdings: Vec<Holding>,
    /// Up to 2 entries, descending by interaction count
    pub top_ecosystems: Vec<EcosystemInteraction>,
}

/// Account age, derived from the earliest known transaction
///
/// Both fields are None exactly when the wallet has no transaction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OgStatus {
    pub first_transaction_date: Option<DateTime<Utc>>,
    pub days_since_first: Option<i64>,
}

/// Recency, derived from the most recent transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSeen {
    pub last_transaction_date: Option<DateTime<Utc>>,
    pub days_since_last: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhaleStatus {
    pub tier: WhaleTier,
    pub sol_balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemInteraction {
    pub name: String,
    pub interaction_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis = WalletAnalysis {
            address: "addr".to_string(),
            og_status: OgStatus {
                first_transaction_date: None,
                days_since_first: None,
            },
            last_seen: LastSeen {
                last_transaction_date: None,
                days_since_last: None,
            },
            whale_status: WhaleStatus {
                tier: WhaleTier::Fish,
                sol_balance: 1.5,
            },
            top_holdings: vec![],
            top_ecosystems: vec![],
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("ogStatus").is_some());
        assert!(json.get("lastSeen").is_some());
        assert!(json.get("whaleStatus").is_some());
        assert!(json.get("topHoldings").is_some());
        assert!(json.get("topEcosystems").is_some());
        assert_eq!(json["whaleStatus"]["tier"], "Fish");
        assert_eq!(
            json["ogStatus"]["firstTransactionDate"],
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_holding_omits_absent_usd_value() {
        let holding = Holding {
            symbol: "BONK".to_string(),
            name: "Bonk".to_string(),
            amount: 10.0,
            usd_value: None,
        };
        let json = serde_json::to_value(&holding).unwrap();
        assert!(json.get("usdValue").is_none());
    }
}
