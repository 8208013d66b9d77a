//! # IPFS Adapter
//!
//! [`ContentStore`] implementation backed by the IPFS HTTP API.
//!
//! Uses the `add` endpoint, which responds with the content hash of the
//! uploaded bytes. The store is content-hash-addressed and idempotent:
//! re-adding identical bytes returns the same hash.

use crate::infrastructure::content::traits::{ContentError, ContentResult, ContentStore};
use crate::infrastructure::http_client::HttpClient;
use async_trait::async_trait;
use serde::Deserialize;

/// Response shape of the IPFS `add` endpoint.
#[derive(Debug, Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
}

/// IPFS-backed content store.
#[derive(Debug, Clone)]
pub struct IpfsContentStore {
    http: HttpClient,
    add_url: String,
}

impl IpfsContentStore {
    /// Path of the add endpoint on an IPFS API host.
    pub const ADD_PATH: &'static str = "/api/v0/add";

    /// Creates a store talking to the given IPFS API base URL
    /// (e.g. `https://ipfs.infura.io:5001`).
    #[must_use]
    pub fn new(http: HttpClient, api_base_url: &str) -> Self {
        let add_url = format!("{}{}", api_base_url.trim_end_matches('/'), Self::ADD_PATH);
        Self { http, add_url }
    }

    /// Returns the resolved add endpoint URL.
    #[must_use]
    pub fn add_url(&self) -> &str {
        &self.add_url
    }
}

#[async_trait]
impl ContentStore for IpfsContentStore {
    async fn add(&self, bytes: Vec<u8>) -> ContentResult<String> {
        let response: AddResponse = self
            .http
            .post_multipart(&self.add_url, "file", bytes)
            .await
            .map_err(|e| ContentError::upload(e.to_string()))?;

        Ok(response.hash)
    }
}
