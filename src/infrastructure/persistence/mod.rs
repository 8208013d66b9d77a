//! # Persistence
//!
//! The append-only NFT ledger: the system's sole durable state.
//!
//! ## Available Components
//!
//! - [`LedgerStore`]: Port for ledger persistence
//! - [`FileLedger`]: JSON-file-backed implementation

pub mod file_ledger;
pub mod traits;

pub use file_ledger::FileLedger;
pub use traits::{LedgerError, LedgerResult, LedgerStore};
