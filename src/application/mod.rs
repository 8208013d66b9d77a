//! # Application Layer
//!
//! Use-case orchestration: chain selection, the end-to-end mint pipeline,
//! batch minting, and the application error taxonomy.

pub mod error;
pub mod services;

pub use error::{MintError, MintResult};
