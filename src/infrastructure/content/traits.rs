//! # Content Store Port
//!
//! Port definition for the content-addressed store and the error type
//! shared by the content publishing layer.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for content publishing operations.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The local source file does not exist. Raised before any network
    /// call is made.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The local source file could not be read.
    #[error("file read error: {path}: {message}")]
    FileRead {
        /// Path of the file.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// Upload to the content store failed.
    #[error("upload error: {0}")]
    Upload(String),

    /// Document serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ContentError {
    /// Creates a file-not-found error.
    #[must_use]
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound(path.into())
    }

    /// Creates a file read error.
    #[must_use]
    pub fn file_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an upload error.
    #[must_use]
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Returns true if this error was raised by input validation rather
    /// than a remote failure.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Port for an opaque content-addressed store.
///
/// The store derives the returned identifier from the content's hash, so
/// adding identical bytes twice yields the same identifier. The hash is
/// the store's responsibility and is never recomputed locally.
#[async_trait]
pub trait ContentStore: Send + Sync + fmt::Debug {
    /// Adds bytes to the store and returns the content hash.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Upload`] if the store is unreachable or
    /// rejects the content.
    async fn add(&self, bytes: Vec<u8>) -> ContentResult<String>;
}
