//! # Gas Price Oracle
//!
//! Per-chain gas price estimation with graceful degradation.
//!
//! Price sourcing is inherently unreliable (rate limits, RPC downtime),
//! so the estimator contract is total: every failure maps to a static
//! default and is reported as a warning, never as an error. A broken
//! price source must not abort a mint.

use crate::domain::chain::ChainProfile;
use crate::infrastructure::http_client::HttpClient;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use tracing::warn;

/// Static fallback gas price for unknown or errored chains.
pub const DEFAULT_GAS_PRICE: f64 = 1.0;

/// Fixed gas price for Polygon; no live query required.
pub const POLYGON_GAS_PRICE: f64 = 30.0;

/// Fixed gas price for Optimism; no live query required.
pub const OPTIMISM_GAS_PRICE: f64 = 0.1;

/// Wei per gwei, used to normalize hex-encoded wei responses.
const WEI_PER_GWEI: f64 = 1e9;

/// Trait for gas price estimation.
///
/// The contract is total: implementations return a positive price for
/// every input chain and absorb all source failures internally.
#[async_trait]
pub trait GasEstimator: Send + Sync + fmt::Debug {
    /// Estimates the gas price for a chain, in fee-token units per gas.
    async fn estimate(&self, chain: &ChainProfile) -> f64;
}

/// Gas price source response: `{"result": "0x..."}` with the price
/// hex-encoded in wei.
#[derive(Debug, Deserialize)]
struct GasPriceResponse {
    result: String,
}

/// Production gas oracle.
///
/// Ethereum is priced through a live HTTP query against the profile's
/// price source; Polygon and Optimism use fixed values; anything else
/// falls back to [`DEFAULT_GAS_PRICE`].
#[derive(Debug, Clone)]
pub struct HttpGasOracle {
    http: HttpClient,
}

impl HttpGasOracle {
    /// Creates a new oracle backed by the given HTTP client.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Queries the chain's price source and normalizes the hex wei value
    /// to fee-token units per gas.
    async fn fetch_live_price(&self, chain: &ChainProfile) -> Result<f64, String> {
        let response: GasPriceResponse = self
            .http
            .get_json(&chain.gas_price_url)
            .await
            .map_err(|e| e.to_string())?;

        parse_hex_wei(&response.result)
    }
}

#[async_trait]
impl GasEstimator for HttpGasOracle {
    async fn estimate(&self, chain: &ChainProfile) -> f64 {
        match chain.name.as_str() {
            "Ethereum" => match self.fetch_live_price(chain).await {
                Ok(price) => price,
                Err(reason) => {
                    warn!(
                        chain = %chain.name,
                        %reason,
                        "could not fetch gas price, using default"
                    );
                    DEFAULT_GAS_PRICE
                }
            },
            "Polygon" => POLYGON_GAS_PRICE,
            "Optimism" => OPTIMISM_GAS_PRICE,
            _ => DEFAULT_GAS_PRICE,
        }
    }
}

/// Parses a hex-encoded wei value into fee-token units per gas.
fn parse_hex_wei(raw: &str) -> Result<f64, String> {
    let stripped = raw.trim_start_matches("0x");
    let wei = u128::from_str_radix(stripped, 16)
        .map_err(|e| format!("invalid hex gas price {raw:?}: {e}"))?;
    Ok(wei as f64 / WEI_PER_GWEI)
}
