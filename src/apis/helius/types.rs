/// Wire types for the Helius v0 REST API
///
/// Upstream payloads are permissive by design: every field defaults when
/// absent so a partially filled record never fails the whole page.
use serde::Deserialize;

// ============================================================================
// BALANCES ENDPOINT (/addresses/{address}/balances)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesResponse {
    /// Native balance in lamports
    #[serde(default)]
    pub native_balance: u64,
    #[serde(default)]
    pub tokens: Vec<TokenBalance>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    #[serde(default)]
    pub mint: String,
    /// Raw integer amount before decimal scaling
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub decimals: Option<u8>,
    /// Token metadata when the provider resolves it
    #[serde(default)]
    pub token_account: Option<TokenAccountMetadata>,
    /// Valuation block, present on newer API versions only
    #[serde(default)]
    pub price_info: Option<PriceInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccountMetadata {
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub token_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    #[serde(default)]
    pub total_price: f64,
}

// ============================================================================
// ENHANCED TRANSACTIONS ENDPOINT (/addresses/{address}/transactions)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeliusTransaction {
    /// Unix timestamp in seconds
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub account_data: Vec<AccountData>,
    #[serde(default)]
    pub instructions: Vec<HeliusInstruction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    #[serde(default)]
    pub account: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeliusInstruction {
    #[serde(default)]
    pub program_id: String,
}
