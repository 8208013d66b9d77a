//! # NFT Metadata Schema
//!
//! The fixed metadata document published alongside every image.
//!
//! The document is serialized deterministically (struct field order,
//! 2-space indentation), so identical inputs always produce byte-identical
//! documents and therefore identical content identifiers. Idempotence is a
//! content-addressing property, not an application-level cache.

use crate::infrastructure::content::traits::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};

/// Static description embedded in every metadata document.
pub const METADATA_DESCRIPTION: &str = "Anoma NFT — minted via intent";

/// Value of the minted-via marker attribute.
pub const MINTED_VIA: &str = "Anoma Intent Engine";

/// A single metadata attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    /// Attribute kind.
    pub trait_type: String,
    /// Attribute value.
    pub value: String,
}

/// The fixed NFT metadata schema.
///
/// Field order here is the serialization order; do not reorder fields
/// without accepting that every content identifier changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    /// Display name.
    pub name: String,
    /// Static description string.
    pub description: String,
    /// Content URI of the published image.
    pub image: String,
    /// Fixed two-entry attribute list: minted-via and cross-chain markers.
    pub attributes: Vec<MetadataAttribute>,
}

impl NftMetadata {
    /// Builds the metadata document for a named NFT and its image URI.
    #[must_use]
    pub fn new(name: impl Into<String>, image_uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: METADATA_DESCRIPTION.to_string(),
            image: image_uri.into(),
            attributes: vec![
                MetadataAttribute {
                    trait_type: "Minted Via".to_string(),
                    value: MINTED_VIA.to_string(),
                },
                MetadataAttribute {
                    trait_type: "Cross-Chain".to_string(),
                    value: "Yes".to_string(),
                },
            ],
        }
    }

    /// Serializes the document deterministically: stable key order and
    /// 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Serialization`] if encoding fails.
    pub fn to_canonical_json(&self) -> ContentResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ContentError::serialization(e.to_string()))
    }
}
