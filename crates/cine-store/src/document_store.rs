//! Minimal JSON document store.
//!
//! Stand-in for the external record store the simulation data service
//! persists into: named collections of JSON documents keyed by string,
//! held in memory with an optional file snapshot. Mutations touch memory
//! only; `flush` writes the snapshot and `load` rehydrates it.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::StoreResult;

type Collections = BTreeMap<String, BTreeMap<String, Value>>;

/// Shared handle to a set of JSON document collections.
#[derive(Clone)]
pub struct DocumentStore {
    path: Option<PathBuf>,
    collections: Arc<RwLock<Collections>>,
}

impl DocumentStore {
    /// Store with no backing file.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            collections: Arc::new(RwLock::new(Collections::new())),
        }
    }

    /// Store snapshotting to `path` on flush.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            collections: Arc::new(RwLock::new(Collections::new())),
        }
    }

    /// Rehydrate collections from the snapshot file. Missing file means
    /// empty; a corrupt snapshot is logged and discarded.
    pub async fn load(&self) -> StoreResult<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };

        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice::<Collections>(&raw) {
            Ok(collections) => {
                *self.collections.write().await = collections;
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), "discarding corrupt document snapshot: {err}");
                Ok(())
            }
        }
    }

    /// Write all collections to the snapshot file, if one is configured.
    pub async fn flush(&self) -> StoreResult<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };

        // Snapshot under the read lock, write the file outside it.
        let collections = self.collections.read().await.clone();
        let raw = serde_json::to_vec_pretty(&collections)?;
        tokio::fs::write(&path, raw).await?;
        Ok(())
    }

    pub async fn get(&self, collection: &str, key: &str) -> Option<Value> {
        self.collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned()
    }

    pub async fn upsert(&self, collection: &str, key: &str, value: Value) {
        debug!(collection, key, "upsert document");
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Remove a document; true when one existed.
    pub async fn delete(&self, collection: &str, key: &str) -> bool {
        self.collections
            .write()
            .await
            .get_mut(collection)
            .map(|docs| docs.remove(key).is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_upsert_get_delete() {
        let store = DocumentStore::in_memory();
        assert_eq!(store.get("paths", "p1").await, None);

        store.upsert("paths", "p1", json!({"duration": 5.0})).await;
        assert_eq!(store.get("paths", "p1").await, Some(json!({"duration": 5.0})));

        store.upsert("paths", "p1", json!({"duration": 8.0})).await;
        assert_eq!(store.get("paths", "p1").await, Some(json!({"duration": 8.0})));

        assert!(store.delete("paths", "p1").await);
        assert!(!store.delete("paths", "p1").await);
    }

    #[tokio::test]
    async fn test_snapshot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");

        let store = DocumentStore::at_path(&path);
        store.upsert("paths", "p1", json!({"x": 1})).await;
        store.flush().await.unwrap();

        let restored = DocumentStore::at_path(&path);
        restored.load().await.unwrap();
        assert_eq!(restored.get("paths", "p1").await, Some(json!({"x": 1})));
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        tokio::fs::write(&path, b"{{{").await.unwrap();

        let store = DocumentStore::at_path(&path);
        store.load().await.unwrap();
        assert_eq!(store.get("paths", "p1").await, None);
    }
}
