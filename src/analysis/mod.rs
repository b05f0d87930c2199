/// Wallet analysis aggregation engine
///
/// Combines the three upstream fetches (balance, transaction history, token
/// positions) with the ecosystem registry into one [`WalletAnalysis`] record.
/// Every upstream failure degrades independently to an empty/zero default, so
/// analysis itself never fails; the worst case is a card with empty fields.
pub mod classification;
pub mod types;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::apis::types::{RawAsset, RawTransaction};
use crate::apis::WalletDataSource;
use crate::arguments::is_debug_analysis_enabled;
use crate::constants::{
    ECOSYSTEM_WINDOW_DAYS, MAX_TOKEN_HOLDINGS, MAX_TOP_ECOSYSTEMS, MAX_TOP_HOLDINGS,
    SECONDS_PER_DAY, SOL_NAME, SOL_SYMBOL,
};
use crate::ecosystems::EcosystemRegistry;
use crate::logger::{self, LogTag};

use self::classification::whale_tier;
use self::types::{
    EcosystemInteraction, Holding, LastSeen, OgStatus, WalletAnalysis, WhaleStatus,
};

/// Ranking key for the top-holdings list
///
/// `UsdValue` falls back to the scaled token amount for entries without a
/// usable valuation; `Amount` ignores valuations entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldingsRanking {
    #[default]
    UsdValue,
    Amount,
}

/// The aggregation engine
///
/// Holds its collaborators by injection so tests can run it against fixture
/// registries and canned data sources.
pub struct Analyzer {
    source: Arc<dyn WalletDataSource>,
    registry: Arc<EcosystemRegistry>,
    ranking: HoldingsRanking,
}

impl Analyzer {
    pub fn new(
        source: Arc<dyn WalletDataSource>,
        registry: Arc<EcosystemRegistry>,
        ranking: HoldingsRanking,
    ) -> Self {
        Self {
            source,
            registry,
            ranking,
        }
    }

    /// Build the full analysis record for one wallet
    pub async fn analyze(&self, address: &str) -> WalletAnalysis {
        self.analyze_at(address, Utc::now().timestamp()).await
    }

    /// Analysis with an explicit "now", the deterministic seam for tests
    async fn analyze_at(&self, address: &str, now: i64) -> WalletAnalysis {
        // Fan out the three fetches, wait for all of them
        let (balance_result, transactions_result, assets_result) = tokio::join!(
            self.source.fetch_balance(address),
            self.source.fetch_transactions(address),
            self.source.fetch_assets(address),
        );

        // Each fetch degrades to its default independently
        let balance = match balance_result {
            Ok(balance) => balance,
            Err(e) => {
                logger::warning(
                    LogTag::Api,
                    &format!("Balance fetch failed for {}: {}", address, e),
                );
                0.0
            }
        };
        let transactions = match transactions_result {
            Ok(transactions) => transactions,
            Err(e) => {
                logger::warning(
                    LogTag::Api,
                    &format!("Transaction fetch failed for {}: {}", address, e),
                );
                Vec::new()
            }
        };
        let assets = match assets_result {
            Ok(assets) => assets,
            Err(e) => {
                logger::warning(
                    LogTag::Api,
                    &format!("Asset fetch failed for {}: {}", address, e),
                );
                Vec::new()
            }
        };

        if is_debug_analysis_enabled() {
            logger::debug(
                LogTag::Analysis,
                &format!(
                    "Aggregating {}: balance={:.4} SOL, {} transactions, {} assets",
                    address,
                    balance,
                    transactions.len(),
                    assets.len()
                ),
            );
        }

        WalletAnalysis {
            address: address.to_string(),
            og_status: og_status(&transactions, now),
            last_seen: last_seen(&transactions, now),
            whale_status: WhaleStatus {
                tier: whale_tier(balance),
                sol_balance: balance,
            },
            top_holdings: top_holdings(&assets, balance, self.ranking),
            top_ecosystems: top_ecosystems(&transactions, &self.registry, now),
        }
    }
}

/// Whole days elapsed between a past timestamp and now
fn days_since(now: i64, timestamp: i64) -> i64 {
    (now - timestamp).div_euclid(SECONDS_PER_DAY)
}

/// Account age from the oldest transaction
///
/// History arrives most-recent-first, so the oldest entry is the last one.
fn og_status(transactions: &[RawTransaction], now: i64) -> OgStatus {
    match transactions.last() {
        Some(tx) => OgStatus {
            first_transaction_date: DateTime::from_timestamp(tx.timestamp, 0),
            days_since_first: Some(days_since(now, tx.timestamp)),
        },
        None => OgStatus {
            first_transaction_date: None,
            days_since_first: None,
        },
    }
}

/// Recency from the newest (first) transaction
fn last_seen(transactions: &[RawTransaction], now: i64) -> LastSeen {
    match transactions.first() {
        Some(tx) => LastSeen {
            last_transaction_date: DateTime::from_timestamp(tx.timestamp, 0),
            days_since_last: Some(days_since(now, tx.timestamp)),
        },
        None => LastSeen {
            last_transaction_date: None,
            days_since_last: None,
        },
    }
}

/// Top holdings: the synthetic SOL entry first, then the best token positions
fn top_holdings(assets: &[RawAsset], sol_balance: f64, ranking: HoldingsRanking) -> Vec<Holding> {
    let mut tokens: Vec<Holding> = assets
        .iter()
        .filter(|asset| asset.fungible && asset.raw_amount > 0)
        .map(|asset| Holding {
            symbol: asset
                .symbol
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            name: asset
                .name
                .clone()
                .unwrap_or_else(|| "Unknown Token".to_string()),
            amount: asset.ui_amount(),
            usd_value: asset.usd_value,
        })
        .collect();

    let ranking_key = |holding: &Holding| match ranking {
        HoldingsRanking::UsdValue => holding
            .usd_value
            .filter(|value| *value > 0.0)
            .unwrap_or(holding.amount),
        HoldingsRanking::Amount => holding.amount,
    };
    tokens.sort_by(|a, b| {
        ranking_key(b)
            .partial_cmp(&ranking_key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    tokens.truncate(MAX_TOKEN_HOLDINGS);

    let mut holdings = Vec::with_capacity(MAX_TOP_HOLDINGS);
    holdings.push(Holding {
        symbol: SOL_SYMBOL.to_string(),
        name: SOL_NAME.to_string(),
        amount: sol_balance,
        // No price oracle wired in; valuation stays at zero
        usd_value: Some(0.0),
    });
    holdings.extend(tokens);
    holdings.truncate(MAX_TOP_HOLDINGS);
    holdings
}

/// Ecosystem interaction counts over the trailing window
///
/// A transaction contributes at most 1 per ecosystem, no matter how many of
/// that ecosystem's program ids it references or where they appear. Equal
/// counts keep registry declaration order (stable sort on count only).
fn top_ecosystems(
    transactions: &[RawTransaction],
    registry: &EcosystemRegistry,
    now: i64,
) -> Vec<EcosystemInteraction> {
    let cutoff = now - ECOSYSTEM_WINDOW_DAYS * SECONDS_PER_DAY;
    let mut counts = vec![0usize; registry.len()];

    for tx in transactions.iter().filter(|tx| tx.timestamp >= cutoff) {
        let mut touched: HashSet<usize> = HashSet::new();
        for program_id in tx.involved_programs() {
            if let Some(index) = registry.index_for_program(program_id) {
                touched.insert(index);
            }
        }
        for index in touched {
            counts[index] += 1;
        }
    }

    let mut ranked: Vec<(usize, usize)> = counts
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_TOP_ECOSYSTEMS);

    ranked
        .into_iter()
        .filter_map(|(index, count)| {
            registry.get(index).map(|ecosystem| EcosystemInteraction {
                name: ecosystem.name.clone(),
                interaction_count: count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::types::ApiError;
    use crate::ecosystems::Ecosystem;
    use async_trait::async_trait;

    const NOW: i64 = 1_700_000_000;

    fn fixture_registry() -> EcosystemRegistry {
        EcosystemRegistry::new(vec![
            Ecosystem {
                key: "alpha".to_string(),
                name: "Alpha".to_string(),
                program_ids: vec!["ProgA1".to_string(), "ProgA2".to_string()],
                description: "Test DEX".to_string(),
            },
            Ecosystem {
                key: "beta".to_string(),
                name: "Beta".to_string(),
                program_ids: vec!["ProgB1".to_string()],
                description: "Test Lending".to_string(),
            },
            Ecosystem {
                key: "gamma".to_string(),
                name: "Gamma".to_string(),
                program_ids: vec!["ProgC1".to_string()],
                description: "Test NFT".to_string(),
            },
        ])
    }

    fn tx(timestamp: i64, accounts: &[&str], programs: &[&str]) -> RawTransaction {
        RawTransaction {
            timestamp,
            account_keys: accounts.iter().map(|s| s.to_string()).collect(),
            instruction_programs: programs.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn asset(raw_amount: u64, decimals: u8, usd_value: Option<f64>) -> RawAsset {
        RawAsset {
            mint: "Mint".to_string(),
            fungible: true,
            raw_amount,
            decimals,
            symbol: Some("TKN".to_string()),
            name: Some("Token".to_string()),
            usd_value,
        }
    }

    struct MockSource {
        balance: Result<f64, ApiError>,
        transactions: Result<Vec<RawTransaction>, ApiError>,
        assets: Result<Vec<RawAsset>, ApiError>,
    }

    #[async_trait]
    impl WalletDataSource for MockSource {
        async fn fetch_balance(&self, _address: &str) -> Result<f64, ApiError> {
            self.balance.clone()
        }

        async fn fetch_transactions(
            &self,
            _address: &str,
        ) -> Result<Vec<RawTransaction>, ApiError> {
            self.transactions.clone()
        }

        async fn fetch_assets(&self, _address: &str) -> Result<Vec<RawAsset>, ApiError> {
            self.assets.clone()
        }
    }

    // ------------------------------------------------------------------
    // Age and recency
    // ------------------------------------------------------------------

    #[test]
    fn test_empty_history_gives_all_null_age_fields() {
        let og = og_status(&[], NOW);
        assert!(og.first_transaction_date.is_none());
        assert!(og.days_since_first.is_none());

        let seen = last_seen(&[], NOW);
        assert!(seen.last_transaction_date.is_none());
        assert!(seen.days_since_last.is_none());
    }

    #[test]
    fn test_single_transaction_first_equals_last() {
        let history = vec![tx(NOW - 5 * SECONDS_PER_DAY, &[], &[])];
        let og = og_status(&history, NOW);
        let seen = last_seen(&history, NOW);
        assert_eq!(og.days_since_first, Some(5));
        assert_eq!(seen.days_since_last, Some(5));
        assert_eq!(og.first_transaction_date, seen.last_transaction_date);
    }

    #[test]
    fn test_age_uses_oldest_and_recency_uses_newest() {
        // Most-recent-first ordering
        let history = vec![
            tx(NOW - SECONDS_PER_DAY, &[], &[]),
            tx(NOW - 100 * SECONDS_PER_DAY, &[], &[]),
        ];
        assert_eq!(og_status(&history, NOW).days_since_first, Some(100));
        assert_eq!(last_seen(&history, NOW).days_since_last, Some(1));
    }

    #[test]
    fn test_days_since_floors_partial_days() {
        assert_eq!(days_since(NOW, NOW - SECONDS_PER_DAY + 1), 0);
        assert_eq!(days_since(NOW, NOW - SECONDS_PER_DAY), 1);
        assert_eq!(days_since(NOW, NOW - 2 * SECONDS_PER_DAY + 1), 1);
    }

    // ------------------------------------------------------------------
    // Top holdings
    // ------------------------------------------------------------------

    #[test]
    fn test_holdings_sol_first_and_capped_at_six() {
        let assets: Vec<RawAsset> = (1..=10)
            .map(|i| asset(i * 1_000_000, 6, None))
            .collect();
        let holdings = top_holdings(&assets, 12.5, HoldingsRanking::UsdValue);

        assert_eq!(holdings.len(), MAX_TOP_HOLDINGS);
        assert_eq!(holdings[0].symbol, "SOL");
        assert_eq!(holdings[0].name, "Solana");
        assert_eq!(holdings[0].amount, 12.5);
        assert_eq!(holdings[0].usd_value, Some(0.0));
    }

    #[test]
    fn test_holdings_sol_first_even_with_empty_assets() {
        let holdings = top_holdings(&[], 0.0, HoldingsRanking::UsdValue);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].symbol, "SOL");
    }

    #[test]
    fn test_holdings_rank_by_usd_with_amount_fallback() {
        let assets = vec![
            asset(1_000_000, 6, Some(5.0)),   // 1.0 TKN worth $5
            asset(9_000_000, 6, None),        // 9.0 TKN unpriced, key = 9.0
            asset(2_000_000, 6, Some(100.0)), // 2.0 TKN worth $100
        ];
        let holdings = top_holdings(&assets, 1.0, HoldingsRanking::UsdValue);
        // SOL, then $100, then the unpriced 9.0, then $5
        assert_eq!(holdings[1].usd_value, Some(100.0));
        assert_eq!(holdings[2].amount, 9.0);
        assert_eq!(holdings[3].usd_value, Some(5.0));
    }

    #[test]
    fn test_holdings_rank_by_amount_ignores_valuation() {
        let assets = vec![
            asset(1_000_000, 6, Some(1_000.0)), // 1.0 TKN, expensive
            asset(50_000_000, 6, Some(1.0)),    // 50.0 TKN, cheap
        ];
        let holdings = top_holdings(&assets, 1.0, HoldingsRanking::Amount);
        assert_eq!(holdings[1].amount, 50.0);
        assert_eq!(holdings[2].amount, 1.0);
    }

    #[test]
    fn test_holdings_skip_nonfungible_and_empty_positions() {
        let mut nft = asset(1, 0, None);
        nft.fungible = false;
        let assets = vec![nft, asset(0, 6, None), asset(3_000_000, 6, None)];
        let holdings = top_holdings(&assets, 1.0, HoldingsRanking::UsdValue);
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[1].amount, 3.0);
    }

    #[test]
    fn test_holdings_default_metadata_labels() {
        let mut unnamed = asset(1_000_000, 6, None);
        unnamed.symbol = None;
        unnamed.name = None;
        let holdings = top_holdings(&[unnamed], 1.0, HoldingsRanking::UsdValue);
        assert_eq!(holdings[1].symbol, "Unknown");
        assert_eq!(holdings[1].name, "Unknown Token");
    }

    // ------------------------------------------------------------------
    // Top ecosystems
    // ------------------------------------------------------------------

    #[test]
    fn test_ecosystems_counts_and_descending_order() {
        let registry = fixture_registry();
        let history = vec![
            tx(NOW - 100, &["ProgB1"], &[]),
            tx(NOW - 200, &["ProgB1"], &[]),
            tx(NOW - 300, &["ProgA1"], &[]),
        ];
        let top = top_ecosystems(&history, &registry, NOW);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Beta");
        assert_eq!(top[0].interaction_count, 2);
        assert_eq!(top[1].name, "Alpha");
        assert_eq!(top[1].interaction_count, 1);
    }

    #[test]
    fn test_ecosystems_duplicate_reference_counts_once() {
        let registry = fixture_registry();
        // Same ecosystem in account keys and instructions, plus a second
        // program id of the same ecosystem
        let history = vec![tx(NOW - 100, &["ProgA1", "ProgA2"], &["ProgA1"])];
        let top = top_ecosystems(&history, &registry, NOW);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].interaction_count, 1);
    }

    #[test]
    fn test_ecosystems_window_excludes_old_transactions() {
        let registry = fixture_registry();
        let history = vec![
            tx(NOW - 31 * SECONDS_PER_DAY, &["ProgA1"], &[]),
            tx(NOW - 29 * SECONDS_PER_DAY, &["ProgB1"], &[]),
        ];
        let top = top_ecosystems(&history, &registry, NOW);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Beta");
    }

    #[test]
    fn test_ecosystems_tie_break_follows_declaration_order() {
        let registry = fixture_registry();
        // Gamma appears before Beta in the history but after it in the
        // registry; with equal counts, registry order wins
        let history = vec![
            tx(NOW - 100, &["ProgC1"], &[]),
            tx(NOW - 200, &["ProgB1"], &[]),
        ];
        let top = top_ecosystems(&history, &registry, NOW);
        assert_eq!(top[0].name, "Beta");
        assert_eq!(top[1].name, "Gamma");
    }

    #[test]
    fn test_ecosystems_capped_at_two() {
        let registry = fixture_registry();
        let history = vec![
            tx(NOW - 100, &["ProgA1"], &[]),
            tx(NOW - 200, &["ProgB1"], &[]),
            tx(NOW - 300, &["ProgC1"], &[]),
        ];
        let top = top_ecosystems(&history, &registry, NOW);
        assert_eq!(top.len(), MAX_TOP_ECOSYSTEMS);
    }

    #[test]
    fn test_ecosystems_unknown_programs_ignored() {
        let registry = fixture_registry();
        let history = vec![tx(NOW - 100, &["SomeRandomProgram"], &["AnotherOne"])];
        assert!(top_ecosystems(&history, &registry, NOW).is_empty());
    }

    // ------------------------------------------------------------------
    // Full aggregation
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_analyze_happy_path() {
        let source = MockSource {
            balance: Ok(15_000.0),
            transactions: Ok(vec![
                tx(NOW - 100, &["ProgA1"], &[]),
                tx(NOW - 10 * SECONDS_PER_DAY, &["ProgB1"], &[]),
            ]),
            assets: Ok(vec![asset(5_000_000_000, 9, None)]),
        };
        let analyzer = Analyzer::new(
            Arc::new(source),
            Arc::new(fixture_registry()),
            HoldingsRanking::UsdValue,
        );

        let analysis = analyzer.analyze_at("wallet", NOW).await;
        assert_eq!(analysis.address, "wallet");
        assert_eq!(analysis.whale_status.tier.as_str(), "Whale");
        assert_eq!(analysis.whale_status.sol_balance, 15_000.0);
        assert_eq!(analysis.og_status.days_since_first, Some(10));
        assert_eq!(analysis.last_seen.days_since_last, Some(0));
        assert_eq!(analysis.top_holdings[0].symbol, "SOL");
        assert_eq!(analysis.top_holdings[1].amount, 5.0);
        assert_eq!(analysis.top_ecosystems.len(), 2);
    }

    #[tokio::test]
    async fn test_analyze_degrades_every_fetch_independently() {
        let source = MockSource {
            balance: Err(ApiError::Timeout),
            transactions: Err(ApiError::NetworkError("boom".to_string())),
            assets: Err(ApiError::InvalidResponse("bad json".to_string())),
        };
        let analyzer = Analyzer::new(
            Arc::new(source),
            Arc::new(fixture_registry()),
            HoldingsRanking::UsdValue,
        );

        let analysis = analyzer.analyze_at("wallet", NOW).await;
        assert_eq!(analysis.whale_status.sol_balance, 0.0);
        assert_eq!(analysis.whale_status.tier.as_str(), "Fish");
        assert!(analysis.og_status.days_since_first.is_none());
        assert!(analysis.last_seen.last_transaction_date.is_none());
        // The synthetic SOL entry survives even a full upstream outage
        assert_eq!(analysis.top_holdings.len(), 1);
        assert_eq!(analysis.top_holdings[0].amount, 0.0);
        assert!(analysis.top_ecosystems.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_partial_failure_keeps_other_fields() {
        let source = MockSource {
            balance: Ok(50.0),
            transactions: Err(ApiError::Timeout),
            assets: Ok(vec![asset(1_000_000, 6, None)]),
        };
        let analyzer = Analyzer::new(
            Arc::new(source),
            Arc::new(fixture_registry()),
            HoldingsRanking::UsdValue,
        );

        let analysis = analyzer.analyze_at("wallet", NOW).await;
        assert_eq!(analysis.whale_status.tier.as_str(), "Fish");
        assert!(analysis.og_status.days_since_first.is_none());
        assert_eq!(analysis.top_holdings.len(), 2);
    }
}
