//! # Mint Orchestrator
//!
//! The end-to-end mint pipeline: resolve a chain (cost-based selection or
//! explicit override), publish image and metadata, and append the
//! resulting record to the ledger.
//!
//! Steps run strictly in sequence. There is no rollback: when the ledger
//! append fails after publishing succeeded, the published content stays
//! orphaned and unreferenced.

use crate::application::error::{MintError, MintResult};
use crate::application::services::chain_selector::ChainSelector;
use crate::domain::chain::{ChainProfile, ChainQuote};
use crate::domain::record::{Intent, NftRecord, TokenId, TokenIdGenerator};
use crate::infrastructure::content::publisher::ContentPublisher;
use crate::infrastructure::persistence::traits::LedgerStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// A mint request.
#[derive(Debug, Clone, Deserialize)]
pub struct MintRequest {
    /// Display name for the NFT.
    pub name: String,
    /// Path of the local image file to publish.
    pub image_path: String,
    /// Optional explicit chain override; bypasses cost-based selection.
    pub chain: Option<String>,
}

impl MintRequest {
    /// Creates a request using cost-based chain selection.
    #[must_use]
    pub fn new(name: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_path: image_path.into(),
            chain: None,
        }
    }

    /// Sets an explicit chain override.
    #[must_use]
    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }

    fn validate(&self) -> MintResult<()> {
        if self.name.trim().is_empty() || self.image_path.trim().is_empty() {
            return Err(MintError::validation("name and image_path required"));
        }
        Ok(())
    }
}

/// The public fields of a freshly minted record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MintReceipt {
    /// Unique token id.
    pub id: TokenId,
    /// Display name.
    pub name: String,
    /// Content URI of the published image.
    pub image_uri: String,
    /// Owner address.
    pub owner: String,
    /// Name of the chain the mint was costed against.
    pub chain: String,
    /// Listing price; currently always `"0"`.
    pub price: String,
    /// Per-chain intent sequences (all empty).
    pub intents: BTreeMap<String, Vec<Intent>>,
}

impl From<&NftRecord> for MintReceipt {
    fn from(record: &NftRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            image_uri: record.image_uri.clone(),
            owner: record.owner.clone(),
            chain: record.chain.clone(),
            price: record.price.clone(),
            intents: record.intents.clone(),
        }
    }
}

/// Composes chain selection, content publishing and the ledger into the
/// end-to-end mint operation.
#[derive(Debug)]
pub struct MintOrchestrator {
    selector: ChainSelector,
    publisher: ContentPublisher,
    ledger: Arc<dyn LedgerStore>,
    chains: Vec<ChainProfile>,
    owner: String,
    token_ids: TokenIdGenerator,
}

impl MintOrchestrator {
    /// Creates an orchestrator.
    ///
    /// `owner` is the address recorded on every minted record; the caller
    /// resolves it from configuration (there is no ambient lookup here).
    #[must_use]
    pub fn new(
        selector: ChainSelector,
        publisher: ContentPublisher,
        ledger: Arc<dyn LedgerStore>,
        chains: Vec<ChainProfile>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            selector,
            publisher,
            ledger,
            chains,
            owner: owner.into(),
            token_ids: TokenIdGenerator::new(),
        }
    }

    /// Returns the configured chain profiles.
    #[must_use]
    pub fn chains(&self) -> &[ChainProfile] {
        &self.chains
    }

    /// Mints an NFT record.
    ///
    /// Steps, strictly sequential: resolve the chain, publish the image,
    /// publish the generated metadata, append the record to the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`MintError::Validation`] for missing fields,
    /// [`MintError::Selection`] for an unknown chain override,
    /// [`MintError::Content`] for a missing source file or failed upload,
    /// and [`MintError::Ledger`] for persistence failures.
    pub async fn mint(&self, request: MintRequest) -> MintResult<MintReceipt> {
        request.validate()?;

        let quote = self.resolve_chain(request.chain.as_deref()).await?;
        let token_id = self.token_ids.next_id();

        let image_uri = self.publisher.publish_file(&request.image_path).await?;
        let metadata_uri = self
            .publisher
            .publish_metadata(&request.name, &image_uri)
            .await?;

        let record = NftRecord {
            id: token_id,
            name: request.name,
            image_uri,
            metadata_uri,
            owner: self.owner.clone(),
            chain: quote.chain_name().to_string(),
            price: "0".to_string(),
            intents: NftRecord::empty_intents(&self.chains),
        };

        self.ledger.append(record.clone()).await?;

        info!(
            id = %record.id,
            chain = %record.chain,
            image = %record.image_uri,
            "minted nft record"
        );
        Ok(MintReceipt::from(&record))
    }

    /// Returns the full persisted ledger in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`MintError::Ledger`] if the backing file is unreadable.
    pub async fn list_all(&self) -> MintResult<Vec<NftRecord>> {
        Ok(self.ledger.load_all().await?)
    }

    /// Resolves the chain for a mint: explicit override when present,
    /// otherwise cost-based selection across all configured chains.
    async fn resolve_chain(&self, override_name: Option<&str>) -> MintResult<ChainQuote> {
        match override_name {
            Some(name) => Ok(self.selector.resolve_override(&self.chains, name)?),
            None => Ok(self.selector.select_optimal(&self.chains).await?),
        }
    }
}
