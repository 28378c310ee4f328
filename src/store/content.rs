//! Content dictionary repository.
//!
//! The content document is only ever read whole or replaced whole, so the
//! mutex here guards against a replace racing the seed write rather than any
//! merge sequence.

use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::ContentDocument;

use super::DocumentStore;

pub struct ContentStore {
    doc: DocumentStore<ContentDocument>,
    lock: Mutex<()>,
}

impl ContentStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            doc: DocumentStore::new(path),
            lock: Mutex::new(()),
        }
    }

    /// Seed the content document on first run.
    pub async fn initialize(&self, default: &ContentDocument) {
        let _guard = self.lock.lock().await;
        self.doc.initialize(default).await;
    }

    /// Read the full document; `None` means unavailable, not empty.
    pub async fn get(&self) -> Option<ContentDocument> {
        let _guard = self.lock.lock().await;
        self.doc.load().await
    }

    /// Overwrite the document verbatim. No merge, no shape validation.
    pub async fn replace(&self, content: &ContentDocument) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        self.doc.save(content).await
    }
}
