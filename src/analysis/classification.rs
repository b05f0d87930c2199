/// Balance-based wallet tier classification
use serde::{Deserialize, Serialize};

/// Coarse wallet size label derived from the SOL balance
///
/// Ordered smallest to largest so tiers compare naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WhaleTier {
    Fish,
    Dolphin,
    Shark,
    Whale,
    Kraken,
}

impl WhaleTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            WhaleTier::Fish => "Fish",
            WhaleTier::Dolphin => "Dolphin",
            WhaleTier::Shark => "Shark",
            WhaleTier::Whale => "Whale",
            WhaleTier::Kraken => "Kraken",
        }
    }
}

impl std::fmt::Display for WhaleTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a SOL balance into its tier, thresholds checked highest first
///
/// Callers ensure the balance is non-negative; negative or NaN input is
/// outside the contract.
pub fn whale_tier(sol_balance: f64) -> WhaleTier {
    if sol_balance >= 100_000.0 {
        WhaleTier::Kraken
    } else if sol_balance >= 10_000.0 {
        WhaleTier::Whale
    } else if sol_balance >= 1_000.0 {
        WhaleTier::Shark
    } else if sol_balance >= 100.0 {
        WhaleTier::Dolphin
    } else {
        WhaleTier::Fish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_inclusive() {
        assert_eq!(whale_tier(0.0), WhaleTier::Fish);
        assert_eq!(whale_tier(99.999), WhaleTier::Fish);
        assert_eq!(whale_tier(100.0), WhaleTier::Dolphin);
        assert_eq!(whale_tier(999.999), WhaleTier::Dolphin);
        assert_eq!(whale_tier(1_000.0), WhaleTier::Shark);
        assert_eq!(whale_tier(9_999.999), WhaleTier::Shark);
        assert_eq!(whale_tier(10_000.0), WhaleTier::Whale);
        assert_eq!(whale_tier(99_999.999), WhaleTier::Whale);
        assert_eq!(whale_tier(100_000.0), WhaleTier::Kraken);
    }

    #[test]
    fn test_tier_is_monotonic_in_balance() {
        let samples = [
            0.0, 1.0, 50.0, 100.0, 500.0, 1_000.0, 5_000.0, 10_000.0, 50_000.0, 100_000.0,
            1_000_000.0,
        ];
        for window in samples.windows(2) {
            assert!(whale_tier(window[0]) <= whale_tier(window[1]));
        }
    }

    #[test]
    fn test_tier_scenarios() {
        assert_eq!(whale_tier(15_000.0), WhaleTier::Whale);
        assert_eq!(whale_tier(50.0), WhaleTier::Fish);
    }

    #[test]
    fn test_tier_serializes_as_label() {
        let json = serde_json::to_string(&WhaleTier::Kraken).unwrap();
        assert_eq!(json, "\"Kraken\"");
    }
}
