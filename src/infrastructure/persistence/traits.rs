//! # Ledger Port
//!
//! Port definition for the append-only NFT ledger.

use crate::domain::record::NftRecord;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Filesystem failure (directory creation, read, write).
    #[error("ledger io error: {0}")]
    Io(String),

    /// The backing file exists but is not valid structured data. Fatal:
    /// there is no partial-record recovery or backup read.
    #[error("ledger corrupt: {0}")]
    Corrupt(String),

    /// Record serialization failure.
    #[error("ledger serialization error: {0}")]
    Serialization(String),
}

impl LedgerError {
    /// Creates an io error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a corrupt-file error.
    #[must_use]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Returns true if the backing file was unreadable as structured data.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt(_))
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Port for the append-only NFT ledger.
///
/// The ledger is an ordered sequence of records; insertion order is
/// significant. Records are never updated or deleted.
#[async_trait]
pub trait LedgerStore: Send + Sync + fmt::Debug {
    /// Appends a record to the end of the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] on filesystem failure and
    /// [`LedgerError::Corrupt`] if the existing backing file cannot be
    /// parsed.
    async fn append(&self, record: NftRecord) -> LedgerResult<()>;

    /// Loads the full ordered ledger.
    ///
    /// A missing backing file yields an empty sequence, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Corrupt`] if the file exists but cannot be
    /// parsed, and [`LedgerError::Io`] on read failure.
    async fn load_all(&self) -> LedgerResult<Vec<NftRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_predicate() {
        assert!(LedgerError::corrupt("bad json").is_corrupt());
        assert!(!LedgerError::io("disk full").is_corrupt());
    }

    #[test]
    fn error_display() {
        assert!(LedgerError::io("disk full").to_string().contains("io"));
        assert!(
            LedgerError::corrupt("unexpected token")
                .to_string()
                .contains("corrupt")
        );
    }
}
