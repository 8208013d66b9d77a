//! # Application Errors
//!
//! Error taxonomy for mint operations.
//!
//! Three classes of failure reach this layer: input validation failures
//! (missing fields, unknown chain override, missing source file), upload
//! failures, and persistence failures. All are fatal to the current
//! operation; there is no retry and previously published content is not
//! rolled back.
//!
//! Transient gas price failures never appear here: the estimator absorbs
//! them into a static default (see the blockchain oracle).

use crate::application::services::chain_selector::SelectionError;
use crate::infrastructure::content::traits::ContentError;
use crate::infrastructure::persistence::traits::LedgerError;
use thiserror::Error;

/// Error type for mint operations.
#[derive(Debug, Error)]
pub enum MintError {
    /// A required request field is missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// Chain selection or override resolution failed.
    #[error("chain selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Content publishing failed.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Ledger persistence failed.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MintError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the failure was caused by caller input (bad
    /// request) rather than by a collaborator.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Selection(_) => true,
            Self::Content(e) => e.is_input_error(),
            Self::Ledger(_) | Self::Internal(_) => false,
        }
    }
}

/// Result type for mint operations.
pub type MintResult<T> = Result<T, MintError>;
