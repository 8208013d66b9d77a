//! # Chain Selector
//!
//! Concurrent per-chain cost estimation and deterministic winner
//! selection.
//!
//! Every configured chain is estimated concurrently; per-chain failures
//! are absorbed by the estimator contract, so one broken price source
//! never affects the others. The winner is the minimum estimated cost,
//! with ties resolving to the earliest-listed chain (the sort is stable
//! and no secondary key is defined).

use crate::domain::chain::{ChainProfile, ChainQuote};
use crate::infrastructure::blockchain::oracle::GasEstimator;
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Error type for chain selection.
#[derive(Debug, Clone, Error)]
pub enum SelectionError {
    /// No chains were supplied to select from.
    #[error("no chains configured")]
    NoChainsConfigured,

    /// An explicit chain override named a chain that is not configured.
    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),
}

impl SelectionError {
    /// Creates an unsupported-chain error.
    #[must_use]
    pub fn unsupported_chain(name: impl Into<String>) -> Self {
        Self::UnsupportedChain(name.into())
    }
}

/// Result type for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Selects the cheapest chain for a mint.
#[derive(Debug, Clone)]
pub struct ChainSelector {
    estimator: Arc<dyn GasEstimator>,
}

impl ChainSelector {
    /// Creates a selector over the given gas estimator.
    #[must_use]
    pub fn new(estimator: Arc<dyn GasEstimator>) -> Self {
        Self { estimator }
    }

    /// Estimates every chain concurrently and returns the quote with the
    /// minimum estimated cost. Ties resolve to the earliest-listed chain.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoChainsConfigured`] for an empty list.
    /// Per-chain estimation failures never surface; the estimator maps
    /// them to its static default.
    pub async fn select_optimal(&self, chains: &[ChainProfile]) -> SelectionResult<ChainQuote> {
        if chains.is_empty() {
            return Err(SelectionError::NoChainsConfigured);
        }

        // join_all preserves input order, which is what makes the
        // stable-sort tie-break deterministic.
        let prices = join_all(chains.iter().map(|chain| self.estimator.estimate(chain))).await;

        let mut quotes: Vec<ChainQuote> = chains
            .iter()
            .zip(prices)
            .map(|(chain, gas_price)| ChainQuote::priced(chain.clone(), gas_price))
            .collect();

        quotes.sort_by(|a, b| {
            a.estimated_cost
                .partial_cmp(&b.estimated_cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for quote in &quotes {
            debug!(chain = quote.chain_name(), cost = quote.estimated_cost, "chain quote");
        }

        quotes
            .into_iter()
            .next()
            .ok_or(SelectionError::NoChainsConfigured)
    }

    /// Resolves an explicit chain override by name, bypassing cost
    /// estimation entirely. The estimator is not invoked for any chain.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnsupportedChain`] if the name does not
    /// match a configured chain.
    pub fn resolve_override(
        &self,
        chains: &[ChainProfile],
        name: &str,
    ) -> SelectionResult<ChainQuote> {
        chains
            .iter()
            .find(|chain| chain.name == name)
            .cloned()
            .map(ChainQuote::unpriced)
            .ok_or_else(|| SelectionError::unsupported_chain(name))
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainSelector")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::chain::REFERENCE_GAS_UNITS;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Estimator returning scripted prices per chain name; counts calls.
    #[derive(Debug)]
    struct ScriptedEstimator {
        prices: HashMap<String, f64>,
        calls: AtomicUsize,
    }

    impl ScriptedEstimator {
        fn new(prices: &[(&str, f64)]) -> Self {
            Self {
                prices: prices
                    .iter()
                    .map(|(name, price)| ((*name).to_string(), *price))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GasEstimator for ScriptedEstimator {
        async fn estimate(&self, chain: &ChainProfile) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prices.get(&chain.name).copied().unwrap_or(1.0)
        }
    }

    fn profile(name: &str) -> ChainProfile {
        ChainProfile::new(name, format!("https://{name}.example/gas"), "TOK", 2)
    }

    #[tokio::test]
    async fn picks_the_cheapest_chain() {
        let chains = vec![profile("A"), profile("B")];
        let selector = ChainSelector::new(Arc::new(ScriptedEstimator::new(&[
            ("A", 2.0),
            ("B", 1.0),
        ])));

        let winner = selector.select_optimal(&chains).await.unwrap();
        assert_eq!(winner.chain_name(), "B");
        assert!((winner.estimated_cost - REFERENCE_GAS_UNITS).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn ties_resolve_to_earliest_listed() {
        let chains = vec![profile("A"), profile("B"), profile("C")];
        let selector = ChainSelector::new(Arc::new(ScriptedEstimator::new(&[
            ("A", 5.0),
            ("B", 5.0),
            ("C", 5.0),
        ])));

        let winner = selector.select_optimal(&chains).await.unwrap();
        assert_eq!(winner.chain_name(), "A");
    }

    #[tokio::test]
    async fn empty_list_is_an_error() {
        let selector = ChainSelector::new(Arc::new(ScriptedEstimator::new(&[])));
        let result = selector.select_optimal(&[]).await;
        assert!(matches!(result, Err(SelectionError::NoChainsConfigured)));
    }

    #[tokio::test]
    async fn estimates_every_supplied_chain() {
        let chains = vec![profile("A"), profile("B"), profile("C")];
        let estimator = Arc::new(ScriptedEstimator::new(&[
            ("A", 3.0),
            ("B", 2.0),
            ("C", 1.0),
        ]));
        let selector = ChainSelector::new(estimator.clone());

        selector.select_optimal(&chains).await.unwrap();
        assert_eq!(estimator.call_count(), 3);
    }

    #[tokio::test]
    async fn override_bypasses_estimation() {
        let chains = vec![profile("A"), profile("Polygon")];
        let estimator = Arc::new(ScriptedEstimator::new(&[("A", 1.0), ("Polygon", 30.0)]));
        let selector = ChainSelector::new(estimator.clone());

        let quote = selector.resolve_override(&chains, "Polygon").unwrap();
        assert_eq!(quote.chain_name(), "Polygon");
        assert_eq!(quote.estimated_cost, 0.0);
        assert_eq!(estimator.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_override_is_fatal() {
        let chains = vec![profile("A")];
        let selector = ChainSelector::new(Arc::new(ScriptedEstimator::new(&[])));

        let result = selector.resolve_override(&chains, "Solana");
        assert!(matches!(result, Err(SelectionError::UnsupportedChain(_))));
    }

    proptest! {
        #[test]
        fn winner_has_minimum_cost(prices in proptest::collection::vec(0.01f64..1000.0, 1..8)) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            rt.block_on(async {
                let chains: Vec<ChainProfile> = (0..prices.len())
                    .map(|i| profile(&format!("chain-{i}")))
                    .collect();
                let scripted: Vec<(String, f64)> = chains
                    .iter()
                    .zip(prices.iter())
                    .map(|(c, p)| (c.name.clone(), *p))
                    .collect();
                let scripted_refs: Vec<(&str, f64)> = scripted
                    .iter()
                    .map(|(name, price)| (name.as_str(), *price))
                    .collect();

                let selector =
                    ChainSelector::new(Arc::new(ScriptedEstimator::new(&scripted_refs)));
                let winner = selector.select_optimal(&chains).await.unwrap();

                let min_cost = prices
                    .iter()
                    .map(|p| p * REFERENCE_GAS_UNITS)
                    .fold(f64::INFINITY, f64::min);
                prop_assert!((winner.estimated_cost - min_cost).abs() < 1e-12);
                Ok(())
            })?;
        }
    }
}
