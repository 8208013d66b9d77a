//! # Domain Layer
//!
//! Core domain types for the mint engine: chain profiles, per-selection
//! chain quotes, and the persisted NFT record with its intent map.

pub mod chain;
pub mod record;

pub use chain::{ChainProfile, ChainQuote, REFERENCE_GAS_UNITS};
pub use record::{Intent, NftRecord, TokenId, TokenIdGenerator};
