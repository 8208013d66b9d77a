//! # Infrastructure Layer
//!
//! Adapters for the engine's external collaborators: gas price sources,
//! the content-addressed store, and the file-backed ledger.

pub mod blockchain;
pub mod content;
pub mod http_client;
pub mod persistence;
