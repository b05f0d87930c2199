/// Upstream API clients
///
/// The aggregation engine only depends on the [`WalletDataSource`] trait, so
/// the concrete indexing provider stays swappable behind this boundary.
pub mod client;
pub mod helius;
pub mod types;

use async_trait::async_trait;

use self::types::{ApiError, RawAsset, RawTransaction};

/// The three wallet queries the aggregation engine needs
///
/// Each operation is independently failable; callers decide how to degrade.
#[async_trait]
pub trait WalletDataSource: Send + Sync {
    /// Native SOL balance of the wallet
    async fn fetch_balance(&self, address: &str) -> Result<f64, ApiError>;

    /// Transaction history, most recent first, single page
    async fn fetch_transactions(&self, address: &str) -> Result<Vec<RawTransaction>, ApiError>;

    /// Token positions held by the wallet
    async fn fetch_assets(&self, address: &str) -> Result<Vec<RawAsset>, ApiError>;
}
