//! # Chain Profiles and Quotes
//!
//! Static descriptors for the supported blockchain networks and the
//! per-selection quote type produced by cost estimation.
//!
//! A [`ChainProfile`] is immutable configuration defined at process start.
//! A [`ChainQuote`] enriches a profile with a live gas price and a derived
//! cost and only lives for the duration of one selection call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assumed reference gas usage used to turn a gas price into a comparable
/// per-chain cost.
pub const REFERENCE_GAS_UNITS: f64 = 0.0001;

/// Static descriptor for a supported blockchain network.
///
/// Profiles are used only for cost comparison, never for transaction
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainProfile {
    /// Unique chain name (e.g. `"Ethereum"`).
    pub name: String,
    /// HTTP endpoint of the chain's gas price source.
    pub gas_price_url: String,
    /// Native fee-token symbol (e.g. `"ETH"`).
    pub fee_token: String,
    /// Average block time in seconds.
    pub avg_block_time_secs: u64,
}

impl ChainProfile {
    /// Creates a new chain profile.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        gas_price_url: impl Into<String>,
        fee_token: impl Into<String>,
        avg_block_time_secs: u64,
    ) -> Self {
        Self {
            name: name.into(),
            gas_price_url: gas_price_url.into(),
            fee_token: fee_token.into(),
            avg_block_time_secs,
        }
    }

    /// The Ethereum mainnet profile, priced via the etherscan gas proxy.
    #[must_use]
    pub fn ethereum() -> Self {
        Self::new(
            "Ethereum",
            "https://api.etherscan.io/api?module=proxy&action=eth_gasPrice",
            "ETH",
            13,
        )
    }

    /// The Polygon mainnet profile.
    #[must_use]
    pub fn polygon() -> Self {
        Self::new("Polygon", "https://polygon-rpc.com/", "MATIC", 2)
    }

    /// The Optimism mainnet profile.
    #[must_use]
    pub fn optimism() -> Self {
        Self::new("Optimism", "https://mainnet.optimism.io/", "ETH", 2)
    }

    /// The default set of supported chains, in comparison order.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![Self::ethereum(), Self::polygon(), Self::optimism()]
    }

    /// Returns the chain name lowercased, as used for ledger intent keys.
    #[must_use]
    pub fn intent_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for ChainProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.fee_token)
    }
}

/// A chain profile enriched with a gas price and a derived cost estimate.
///
/// Created fresh per selection call and never persisted. Quotes produced
/// by an explicit chain override carry no cost (both figures zero) since
/// the override path skips estimation entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainQuote {
    /// The underlying chain profile.
    pub profile: ChainProfile,
    /// Gas price in fee-token units per gas.
    pub gas_price: f64,
    /// Derived cost: `gas_price * REFERENCE_GAS_UNITS`.
    pub estimated_cost: f64,
}

impl ChainQuote {
    /// Creates a priced quote, deriving the estimated cost from the gas
    /// price and the reference gas usage.
    #[must_use]
    pub fn priced(profile: ChainProfile, gas_price: f64) -> Self {
        Self {
            profile,
            gas_price,
            estimated_cost: gas_price * REFERENCE_GAS_UNITS,
        }
    }

    /// Creates an unpriced quote for an explicit chain override.
    #[must_use]
    pub fn unpriced(profile: ChainProfile) -> Self {
        Self {
            profile,
            gas_price: 0.0,
            estimated_cost: 0.0,
        }
    }

    /// Returns the chain name.
    #[must_use]
    pub fn chain_name(&self) -> &str {
        &self.profile.name
    }
}

impl fmt::Display for ChainQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}/gas (cost {:.6})",
            self.profile.name, self.gas_price, self.profile.fee_token, self.estimated_cost
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_chains_in_comparison_order() {
        let chains = ChainProfile::builtin();
        let names: Vec<&str> = chains.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ethereum", "Polygon", "Optimism"]);
    }

    #[test]
    fn intent_key_is_lowercase() {
        assert_eq!(ChainProfile::ethereum().intent_key(), "ethereum");
        assert_eq!(ChainProfile::polygon().intent_key(), "polygon");
    }

    #[test]
    fn priced_quote_derives_cost() {
        let quote = ChainQuote::priced(ChainProfile::polygon(), 30.0);
        assert!((quote.estimated_cost - 30.0 * REFERENCE_GAS_UNITS).abs() < f64::EPSILON);
        assert_eq!(quote.chain_name(), "Polygon");
    }

    #[test]
    fn unpriced_quote_has_no_cost() {
        let quote = ChainQuote::unpriced(ChainProfile::optimism());
        assert_eq!(quote.gas_price, 0.0);
        assert_eq!(quote.estimated_cost, 0.0);
    }

    #[test]
    fn profile_serde_roundtrip() {
        let profile = ChainProfile::ethereum();
        let json = serde_json::to_string(&profile).unwrap();
        let back: ChainProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
