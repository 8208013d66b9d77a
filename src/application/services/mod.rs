//! # Application Services
//!
//! Services composing domain logic and infrastructure:
//!
//! - [`ChainSelector`]: Concurrent per-chain cost estimation and winner
//!   selection
//! - [`MintOrchestrator`]: The end-to-end mint pipeline
//! - [`BatchMinter`]: Rate-limited sequential batch minting

pub mod batch_mint;
pub mod chain_selector;
pub mod mint_orchestrator;

pub use batch_mint::{BatchJob, BatchMinter, BatchOutcome};
pub use chain_selector::{ChainSelector, SelectionError};
pub use mint_orchestrator::{MintOrchestrator, MintReceipt, MintRequest};
