//! # File-Backed Ledger
//!
//! [`LedgerStore`] implementation persisting the full record sequence as
//! one pretty-printed JSON file.
//!
//! Every append is a read-modify-write of the whole file: load the
//! current sequence (empty when the file is absent), push the record,
//! rewrite. A single-writer mutex serializes that cycle; unsynchronized
//! racing appends would silently drop each other's records.

use crate::domain::record::NftRecord;
use crate::infrastructure::persistence::traits::{LedgerError, LedgerResult, LedgerStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::info;

/// JSON-file-backed ledger store.
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    /// Serializes the read-modify-write cycle across concurrent appends.
    write_lock: Mutex<()>,
}

impl FileLedger {
    /// Creates a ledger backed by the given file path. Neither the file
    /// nor its directory needs to exist yet; both are created lazily on
    /// first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the backing file, treating a missing file as an
    /// empty ledger.
    async fn read_records(&self) -> LedgerResult<Vec<NftRecord>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LedgerError::io(e.to_string())),
        };

        serde_json::from_str(&raw).map_err(|e| LedgerError::corrupt(e.to_string()))
    }

    /// Rewrites the backing file with the full record sequence.
    async fn write_records(&self, records: &[NftRecord]) -> LedgerResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| LedgerError::io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| LedgerError::serialization(e.to_string()))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| LedgerError::io(e.to_string()))
    }
}

#[async_trait]
impl LedgerStore for FileLedger {
    async fn append(&self, record: NftRecord) -> LedgerResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        records.push(record);
        self.write_records(&records).await?;

        info!(
            path = %self.path.display(),
            total = records.len(),
            "appended nft record"
        );
        Ok(())
    }

    async fn load_all(&self) -> LedgerResult<Vec<NftRecord>> {
        self.read_records().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::chain::ChainProfile;
    use crate::domain::record::TokenId;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_record(millis: i64, name: &str) -> NftRecord {
        NftRecord {
            id: TokenId::from_millis(millis),
            name: name.to_string(),
            image_uri: "ipfs://QmImage".to_string(),
            metadata_uri: "ipfs://QmMeta".to_string(),
            owner: "owner-1".to_string(),
            chain: "Polygon".to_string(),
            price: "0".to_string(),
            intents: NftRecord::empty_intents(&ChainProfile::builtin()),
        }
    }

    fn ledger_in(dir: &TempDir) -> FileLedger {
        FileLedger::new(dir.path().join("db").join("nfts.json"))
    }

    #[tokio::test]
    async fn load_all_without_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        assert!(ledger.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);

        let record = test_record(1, "First");
        ledger.append(record.clone()).await.unwrap();

        let all = ledger.load_all().await.unwrap();
        assert_eq!(all, vec![record]);
    }

    #[tokio::test]
    async fn appends_preserve_insertion_order() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);

        ledger.append(test_record(1, "First")).await.unwrap();
        ledger.append(test_record(2, "Second")).await.unwrap();
        ledger.append(test_record(3, "Third")).await.unwrap();

        let names: Vec<String> = ledger
            .load_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn corrupt_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nfts.json");
        tokio::fs::write(&path, "{ this is not json ]").await.unwrap();

        let ledger = FileLedger::new(&path);
        let load = ledger.load_all().await;
        assert!(matches!(load, Err(LedgerError::Corrupt(_))));

        let append = ledger.append(test_record(1, "First")).await;
        assert!(matches!(append, Err(LedgerError::Corrupt(_))));
    }

    #[tokio::test]
    async fn concurrent_appends_lose_nothing() {
        let dir = TempDir::new().unwrap();
        let ledger = Arc::new(ledger_in(&dir));

        let mut handles = Vec::new();
        for i in 0..10 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                ledger.append(test_record(i, &format!("nft-{i}"))).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(ledger.load_all().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn backing_file_is_pretty_json() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        ledger.append(test_record(1, "First")).await.unwrap();

        let raw = tokio::fs::read_to_string(ledger.path()).await.unwrap();
        assert!(raw.contains("\n  {"));
        assert!(raw.contains("\"price\": \"0\""));
    }
}
