//! # intent-mint
//!
//! A cross-chain NFT mint orchestrator.
//!
//! The engine estimates the cost of minting on every configured chain,
//! picks the cheapest (or honors an explicit override), publishes the
//! image and a generated metadata document to a content-addressed store,
//! and appends the resulting record to an append-only JSON ledger. No
//! transaction is ever submitted on-chain; chains exist here purely for
//! cost comparison, and each record carries an empty per-chain intent map
//! reserved for future cross-chain matching.
//!
//! # Architecture
//!
//! - [`domain`]: chain profiles, quotes, records and token ids
//! - [`application`]: chain selection, the mint pipeline, batch minting
//! - [`infrastructure`]: gas price oracle, IPFS adapter, file ledger
//! - [`api`]: REST endpoints
//! - [`config`]: explicit application configuration
//!
//! # Example
//!
//! ```ignore
//! use intent_mint::application::services::{ChainSelector, MintOrchestrator, MintRequest};
//! use intent_mint::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! let orchestrator = /* wire selector, publisher and ledger */;
//! let receipt = orchestrator.mint(MintRequest::new("My NFT", "./art.png")).await?;
//! println!("minted {} on {}", receipt.id, receipt.chain);
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
