//! # NFT Records and Token Ids
//!
//! The persisted NFT record, its per-chain intent map, and monotonic
//! token id generation.
//!
//! Records are created once per successful mint and never updated or
//! deleted. The intent map always holds exactly one key per supported
//! chain, each an empty sequence reserved for future cross-chain matching.

use crate::domain::chain::ChainProfile;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Placeholder for a future cross-chain matching intent.
///
/// Never instantiated by this engine; present so the persisted shape
/// already carries the per-chain intent sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Opaque intent payload.
    pub payload: serde_json::Value,
}

/// Unique token identifier in the legacy `nft_<unix-millis>` format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Creates a token id from a millisecond timestamp.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("nft_{millis}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic token id generator.
///
/// Ids keep the time-derived `nft_<unix-millis>` format, but two calls
/// within the same millisecond can no longer collide: the generator never
/// issues a value less than or equal to the previous one.
#[derive(Debug, Default)]
pub struct TokenIdGenerator {
    last_millis: AtomicI64,
}

impl TokenIdGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next unique token id.
    #[must_use]
    pub fn next_id(&self) -> TokenId {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(0);
        TokenId::from_millis(now.max(previous + 1))
    }
}

/// A persisted NFT record.
///
/// Immutable after creation. If a mint fails after content publishing but
/// before the ledger append, the published content stays orphaned and is
/// never referenced by any record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftRecord {
    /// Unique token id.
    pub id: TokenId,
    /// Display name.
    pub name: String,
    /// Content URI of the published image.
    pub image_uri: String,
    /// Content URI of the published metadata document.
    pub metadata_uri: String,
    /// Owner address.
    pub owner: String,
    /// Name of the chain the mint was costed against.
    pub chain: String,
    /// Listing price; currently always `"0"`.
    pub price: String,
    /// Per-chain intent sequences, keyed by lowercase chain name.
    /// One entry per supported chain, each empty at creation.
    pub intents: BTreeMap<String, Vec<Intent>>,
}

impl NftRecord {
    /// Builds the intent map for the given supported chains: one empty
    /// sequence per chain, keyed by the lowercase chain name.
    #[must_use]
    pub fn empty_intents(chains: &[ChainProfile]) -> BTreeMap<String, Vec<Intent>> {
        chains
            .iter()
            .map(|chain| (chain.intent_key(), Vec::new()))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn token_id_format() {
        let id = TokenId::from_millis(1_700_000_000_000);
        assert_eq!(id.as_str(), "nft_1700000000000");
        assert_eq!(id.to_string(), "nft_1700000000000");
    }

    #[test]
    fn generator_ids_are_distinct() {
        let generator = TokenIdGenerator::new();
        let a = generator.next_id();
        let b = generator.next_id();
        let c = generator.next_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn generator_ids_are_monotonic() {
        let generator = TokenIdGenerator::new();
        let ids: Vec<String> = (0..50)
            .map(|_| generator.next_id().as_str().to_string())
            .collect();
        let millis: Vec<i64> = ids
            .iter()
            .map(|id| id.trim_start_matches("nft_").parse().unwrap())
            .collect();
        for pair in millis.windows(2) {
            assert!(pair[0] < pair[1], "ids must strictly increase");
        }
    }

    #[test]
    fn empty_intents_cover_all_chains() {
        let intents = NftRecord::empty_intents(&ChainProfile::builtin());
        assert_eq!(intents.len(), 3);
        assert!(intents.contains_key("ethereum"));
        assert!(intents.contains_key("polygon"));
        assert!(intents.contains_key("optimism"));
        assert!(intents.values().all(Vec::is_empty));
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = NftRecord {
            id: TokenId::from_millis(1),
            name: "Test".to_string(),
            image_uri: "ipfs://Qm1".to_string(),
            metadata_uri: "ipfs://Qm2".to_string(),
            owner: "owner-1".to_string(),
            chain: "Polygon".to_string(),
            price: "0".to_string(),
            intents: NftRecord::empty_intents(&ChainProfile::builtin()),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: NftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
