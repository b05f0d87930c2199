/// Global constants used across SolPack
///
/// This module contains system-wide constants that are not configurable
/// and are used across multiple modules.

// ============================================================================
// SOLANA BLOCKCHAIN CONSTANTS
// ============================================================================

/// SOL token mint address (wrapped SOL / WSOL)
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Number of decimal places for SOL token
pub const SOL_DECIMALS: u8 = 9;

/// Lamports per SOL (10^9)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Display symbol and name for the native SOL holding entry
pub const SOL_SYMBOL: &str = "SOL";
pub const SOL_NAME: &str = "Solana";

/// Solana addresses are base58 and land in this length range
pub const MIN_ADDRESS_LEN: usize = 32;
pub const MAX_ADDRESS_LEN: usize = 44;

// ============================================================================
// ANALYSIS CONSTANTS
// ============================================================================

/// Seconds in one day, used for day-count math on unix timestamps
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Maximum holdings returned in a wallet card (SOL entry included)
pub const MAX_TOP_HOLDINGS: usize = 6;

/// Maximum non-SOL token holdings kept before the SOL entry is prepended
pub const MAX_TOKEN_HOLDINGS: usize = 5;

/// Maximum ecosystems returned in a wallet card
pub const MAX_TOP_ECOSYSTEMS: usize = 2;

/// Ecosystem interactions are counted over this trailing window
pub const ECOSYSTEM_WINDOW_DAYS: i64 = 30;
