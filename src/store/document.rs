//! Generic whole-file JSON document store.
//!
//! Every operation reads or overwrites the entire file; there is no
//! record-level access. Read failures degrade to `None` so a missing or
//! corrupt file never takes a request down, at the cost of being
//! indistinguishable from an empty document.

use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;

/// A single JSON document persisted as one pretty-printed file.
pub struct DocumentStore<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> DocumentStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Ensure the parent directory exists and seed the file with `default`
    /// if it is absent. Idempotent; safe to call on every startup. Failures
    /// are logged and swallowed, leaving subsequent reads to degrade.
    pub async fn initialize(&self, default: &T) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = tokio::fs::create_dir_all(parent).await {
                tracing::error!("Error creating data directory {:?}: {}", parent, err);
                return;
            }
        }

        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return;
        }

        match serde_json::to_string_pretty(default) {
            Ok(json) => {
                if let Err(err) = tokio::fs::write(&self.path, json).await {
                    tracing::error!("Error seeding {:?}: {}", self.path, err);
                }
            }
            Err(err) => {
                tracing::error!("Error serializing seed for {:?}: {}", self.path, err);
            }
        }
    }

    /// Load and parse the document. Any failure (missing file, invalid JSON,
    /// I/O error) is logged and yields `None`; callers must treat that as
    /// "unavailable", not "confirmed empty".
    pub async fn load(&self) -> Option<T> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) => {
                tracing::error!("Error reading {:?}: {}", self.path, err);
                return None;
            }
        };

        match serde_json::from_slice(&data) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!("Error parsing {:?}: {}", self.path, err);
                None
            }
        }
    }

    /// Serialize `value` as pretty-printed JSON (2-space indent) and
    /// overwrite the file completely. No atomic rename: an interrupted write
    /// can leave the file corrupt, which the next `load` reports as `None`.
    pub async fn save(&self, value: &T) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store: DocumentStore<Value> = DocumentStore::new(dir.path().join("doc.json"));

        let value = json!({"en": {"heroSlogan": "Hi"}, "list": [1, 2, 3]});
        store.save(&value).await.unwrap();

        assert_eq!(store.load().await, Some(value));
    }

    #[tokio::test]
    async fn test_load_missing_file_yields_none() {
        let dir = TempDir::new().unwrap();
        let store: DocumentStore<Value> = DocumentStore::new(dir.path().join("absent.json"));

        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_load_invalid_json_yields_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let store: DocumentStore<Value> = DocumentStore::new(path);
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_initialize_seeds_once() {
        let dir = TempDir::new().unwrap();
        let store: DocumentStore<Value> = DocumentStore::new(dir.path().join("sub/doc.json"));

        store.initialize(&json!({"seed": true})).await;
        assert_eq!(store.load().await, Some(json!({"seed": true})));

        // Second initialize must not clobber a modified document
        store.save(&json!({"seed": false})).await.unwrap();
        store.initialize(&json!({"seed": true})).await;
        assert_eq!(store.load().await, Some(json!({"seed": false})));
    }

    #[tokio::test]
    async fn test_save_writes_pretty_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        let store: DocumentStore<Value> = DocumentStore::new(path.clone());

        store.save(&json!({"a": 1})).await.unwrap();
        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(text, "{\n  \"a\": 1\n}");
    }
}
