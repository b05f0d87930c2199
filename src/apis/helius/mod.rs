/// Helius API client for wallet history and balances
///
/// API Documentation: https://docs.helius.dev/
///
/// Endpoints implemented:
/// 1. /addresses/{address}/balances - Native balance and token positions
/// 2. /addresses/{address}/transactions - Enhanced transaction history

pub mod types;

use async_trait::async_trait;

use self::types::{BalancesResponse, HeliusTransaction, TokenBalance};
use crate::apis::client::HttpClient;
use crate::apis::types::{ApiError, RawAsset, RawTransaction};
use crate::apis::WalletDataSource;
use crate::arguments::is_debug_api_enabled;
use crate::config::HeliusConfig;
use crate::constants::LAMPORTS_PER_SOL;
use crate::logger::{self, LogTag};

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct HeliusClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
    transaction_page_limit: usize,
}

impl HeliusClient {
    pub fn new(config: &HeliusConfig) -> Result<Self, String> {
        if config.api_key.is_empty() {
            return Err("Helius API key is empty".to_string());
        }

        let http_client = HttpClient::new(config.timeout_secs)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            transaction_page_limit: config.transaction_page_limit,
        })
    }

    /// GET a Helius endpoint and deserialize the JSON body
    ///
    /// The api-key query parameter is appended here and never logged.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        extra_query: &str,
    ) -> Result<T, ApiError> {
        let url = format!(
            "{}{}?api-key={}{}",
            self.base_url, path, self.api_key, extra_query
        );

        if is_debug_api_enabled() {
            logger::debug(LogTag::Api, &format!("GET {}{}", self.base_url, path));
        }

        let response = self
            .http_client
            .client()
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::InvalidResponse(format!("HTTP {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn get_balances(&self, address: &str) -> Result<BalancesResponse, ApiError> {
        self.get_json(&format!("/addresses/{}/balances", address), "")
            .await
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Non-fungible positions show up in the balances payload as single
/// indivisible units; everything else is treated as a fungible token.
fn is_fungible(token: &TokenBalance) -> bool {
    !(token.decimals.unwrap_or(0) == 0 && token.amount == 1)
}

fn normalize_asset(token: TokenBalance) -> RawAsset {
    let fungible = is_fungible(&token);
    let (symbol, name) = match token.token_account {
        Some(meta) => (meta.token_symbol, meta.token_name),
        None => (None, None),
    };
    let usd_value = token
        .price_info
        .map(|p| p.total_price)
        .filter(|v| *v > 0.0);

    RawAsset {
        mint: token.mint,
        fungible,
        raw_amount: token.amount,
        // The provider omits decimals for some legacy mints; SPL default is 9
        decimals: token.decimals.unwrap_or(9),
        symbol,
        name,
        usd_value,
    }
}

fn normalize_transaction(tx: HeliusTransaction) -> RawTransaction {
    RawTransaction {
        timestamp: tx.timestamp,
        account_keys: tx.account_data.into_iter().map(|a| a.account).collect(),
        instruction_programs: tx.instructions.into_iter().map(|i| i.program_id).collect(),
    }
}

// ============================================================================
// DATA SOURCE IMPLEMENTATION
// ============================================================================

#[async_trait]
impl WalletDataSource for HeliusClient {
    async fn fetch_balance(&self, address: &str) -> Result<f64, ApiError> {
        let balances = self.get_balances(address).await?;
        Ok(balances.native_balance as f64 / LAMPORTS_PER_SOL as f64)
    }

    async fn fetch_transactions(&self, address: &str) -> Result<Vec<RawTransaction>, ApiError> {
        let transactions: Vec<HeliusTransaction> = self
            .get_json(
                &format!("/addresses/{}/transactions", address),
                &format!("&limit={}", self.transaction_page_limit),
            )
            .await?;

        if is_debug_api_enabled() {
            logger::debug(
                LogTag::Api,
                &format!("Fetched {} transactions for {}", transactions.len(), address),
            );
        }

        Ok(transactions
            .into_iter()
            .map(normalize_transaction)
            .collect())
    }

    async fn fetch_assets(&self, address: &str) -> Result<Vec<RawAsset>, ApiError> {
        let balances = self.get_balances(address).await?;
        Ok(balances.tokens.into_iter().map(normalize_asset).collect())
    }
}
