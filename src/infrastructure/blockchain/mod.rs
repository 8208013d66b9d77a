//! # Blockchain Infrastructure
//!
//! Gas price sourcing for the supported chains. Price sources are treated
//! as opaque remote services; no transactions are ever submitted.

pub mod oracle;

pub use oracle::{GasEstimator, HttpGasOracle};
