//! # Content Publisher
//!
//! High-level publishing operations over a [`ContentStore`]: image bytes,
//! arbitrary JSON documents, and the fixed NFT metadata schema. Returned
//! identifiers are `ipfs://` URIs wrapping the store's content hash.

use crate::infrastructure::content::metadata::NftMetadata;
use crate::infrastructure::content::traits::{ContentError, ContentResult, ContentStore};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// URI scheme prefix for published content.
const URI_SCHEME: &str = "ipfs://";

/// Publishes content to a content-addressed store.
#[derive(Debug, Clone)]
pub struct ContentPublisher {
    store: Arc<dyn ContentStore>,
}

impl ContentPublisher {
    /// Creates a publisher over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Publishes raw bytes and returns the content URI.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Upload`] if the store is unreachable.
    pub async fn publish_bytes(&self, bytes: Vec<u8>) -> ContentResult<String> {
        let hash = self.store.add(bytes).await?;
        Ok(format!("{URI_SCHEME}{hash}"))
    }

    /// Reads a local file and publishes its bytes.
    ///
    /// Fails fast with [`ContentError::FileNotFound`] before any network
    /// call when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::FileNotFound`], [`ContentError::FileRead`]
    /// or [`ContentError::Upload`].
    pub async fn publish_file(&self, path: impl AsRef<Path>) -> ContentResult<String> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ContentError::file_not_found(path.display().to_string()));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ContentError::file_read(path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), size = bytes.len(), "publishing file");
        self.publish_bytes(bytes).await
    }

    /// Serializes a document deterministically (stable key order, 2-space
    /// indentation) and publishes it, returning the content URI.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Serialization`] or [`ContentError::Upload`].
    pub async fn publish_json<T: Serialize>(&self, document: &T) -> ContentResult<String> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| ContentError::serialization(e.to_string()))?;
        self.publish_bytes(json.into_bytes()).await
    }

    /// Builds and publishes the metadata document for a named NFT,
    /// embedding the given image URI.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Serialization`] or [`ContentError::Upload`].
    pub async fn publish_metadata(&self, name: &str, image_uri: &str) -> ContentResult<String> {
        let metadata = NftMetadata::new(name, image_uri);
        let json = metadata.to_canonical_json()?;
        self.publish_bytes(json.into_bytes()).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory content-addressed store: the "hash" is derived from the
    /// bytes, so identical content gets an identical id.
    #[derive(Debug, Default)]
    struct FakeStore {
        added: Mutex<Vec<Vec<u8>>>,
        fail: bool,
    }

    impl FakeStore {
        fn failing() -> Self {
            Self {
                added: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn upload_count(&self) -> usize {
            self.added.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ContentStore for FakeStore {
        async fn add(&self, bytes: Vec<u8>) -> ContentResult<String> {
            if self.fail {
                return Err(ContentError::upload("store unreachable"));
            }
            let digest: u64 = bytes.iter().fold(0u64, |acc, b| {
                acc.wrapping_mul(31).wrapping_add(u64::from(*b))
            });
            self.added.lock().unwrap().push(bytes);
            Ok(format!("Qm{digest:x}"))
        }
    }

    #[tokio::test]
    async fn publish_bytes_wraps_hash_in_uri() {
        let publisher = ContentPublisher::new(Arc::new(FakeStore::default()));
        let uri = publisher.publish_bytes(b"content".to_vec()).await.unwrap();
        assert!(uri.starts_with("ipfs://Qm"));
    }

    #[tokio::test]
    async fn publish_file_missing_fails_before_upload() {
        let store = Arc::new(FakeStore::default());
        let publisher = ContentPublisher::new(store.clone());

        let result = publisher.publish_file("./definitely-missing.png").await;
        assert!(matches!(result, Err(ContentError::FileNotFound(_))));
        assert_eq!(store.upload_count(), 0);
    }

    #[tokio::test]
    async fn publish_file_reads_and_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");
        tokio::fs::write(&path, b"png bytes").await.unwrap();

        let store = Arc::new(FakeStore::default());
        let publisher = ContentPublisher::new(store.clone());

        let uri = publisher.publish_file(&path).await.unwrap();
        assert!(uri.starts_with("ipfs://"));
        assert_eq!(store.upload_count(), 1);
    }

    #[tokio::test]
    async fn publish_json_identical_input_identical_id() {
        let publisher = ContentPublisher::new(Arc::new(FakeStore::default()));
        let document: HashMap<&str, &str> = [("name", "Test")].into_iter().collect();

        let first = publisher.publish_json(&document).await.unwrap();
        let second = publisher.publish_json(&document).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn publish_metadata_identical_input_identical_id() {
        let publisher = ContentPublisher::new(Arc::new(FakeStore::default()));

        let first = publisher.publish_metadata("Test", "ipfs://Qm1").await.unwrap();
        let second = publisher.publish_metadata("Test", "ipfs://Qm1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unreachable_store_surfaces_upload_error() {
        let publisher = ContentPublisher::new(Arc::new(FakeStore::failing()));
        let result = publisher.publish_bytes(b"content".to_vec()).await;
        assert!(matches!(result, Err(ContentError::Upload(_))));
    }
}
