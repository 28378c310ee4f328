//! Speaker roster repository.
//!
//! Wraps the speakers document behind a mutex so concurrent mutating
//! requests cannot interleave their read-modify-write sequences and lose
//! updates.

use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::{CreateSpeakerRequest, Speaker, UpdateSpeakerRequest};

use super::DocumentStore;

pub struct SpeakerStore {
    doc: DocumentStore<Vec<Speaker>>,
    lock: Mutex<()>,
}

impl SpeakerStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            doc: DocumentStore::new(path),
            lock: Mutex::new(()),
        }
    }

    /// Seed the roster document on first run.
    pub async fn initialize(&self, default: &[Speaker]) {
        let _guard = self.lock.lock().await;
        self.doc.initialize(&default.to_vec()).await;
    }

    /// List all speakers. An unreadable document reads as an empty roster.
    pub async fn list(&self) -> Vec<Speaker> {
        let _guard = self.lock.lock().await;
        self.doc.load().await.unwrap_or_default()
    }

    /// Find a speaker by id.
    pub async fn get(&self, id: u64) -> Option<Speaker> {
        let _guard = self.lock.lock().await;
        self.doc
            .load()
            .await
            .unwrap_or_default()
            .into_iter()
            .find(|s| s.id == id)
    }

    /// Create a speaker under a freshly assigned id.
    ///
    /// The id is the maximum existing id plus one, so deletions never cause
    /// reuse while any higher-numbered record remains. An emptied roster
    /// restarts at 1.
    pub async fn create(&self, request: CreateSpeakerRequest) -> Result<Speaker, AppError> {
        let _guard = self.lock.lock().await;
        let mut speakers = self.doc.load().await.unwrap_or_default();

        let id = speakers.iter().map(|s| s.id).max().map_or(1, |max| max + 1);
        let speaker = Speaker::from_create(id, request);

        speakers.push(speaker.clone());
        self.doc.save(&speakers).await?;
        Ok(speaker)
    }

    /// Shallow-merge `request` over the speaker with `id` and persist.
    pub async fn update(
        &self,
        id: u64,
        request: UpdateSpeakerRequest,
    ) -> Result<Speaker, AppError> {
        let _guard = self.lock.lock().await;
        let mut speakers = self.doc.load().await.unwrap_or_default();

        let speaker = speakers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Speaker not found".to_string()))?;

        speaker.apply_update(request);
        let updated = speaker.clone();

        self.doc.save(&speakers).await?;
        Ok(updated)
    }

    /// Remove the speaker with `id` and persist the filtered roster.
    pub async fn delete(&self, id: u64) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut speakers = self.doc.load().await.unwrap_or_default();

        let before = speakers.len();
        speakers.retain(|s| s.id != id);
        if speakers.len() == before {
            return Err(AppError::NotFound("Speaker not found".to_string()));
        }

        self.doc.save(&speakers).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_request(name: &str) -> CreateSpeakerRequest {
        serde_json::from_value(json!({"name": name})).unwrap()
    }

    fn store(dir: &TempDir) -> SpeakerStore {
        SpeakerStore::new(dir.path().join("speakers.json"))
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        for expected in 1..=3 {
            let speaker = store.create(create_request("X")).await.unwrap();
            assert_eq!(speaker.id, expected);
        }
    }

    #[tokio::test]
    async fn test_create_after_deleting_max_does_not_reuse_held_ids() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.create(create_request("a")).await.unwrap(); // id 1
        store.create(create_request("b")).await.unwrap(); // id 2
        let c = store.create(create_request("c")).await.unwrap(); // id 3

        store.delete(c.id).await.unwrap();
        let next = store.create(create_request("d")).await.unwrap();

        // max(remaining) + 1, not len + 1
        assert_eq!(next.id, 3);
        assert!(store.get(2).await.is_some());
    }

    #[tokio::test]
    async fn test_create_on_emptied_roster_restarts_at_one() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let first = store.create(create_request("a")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let next = store.create(create_request("b")).await.unwrap();
        assert_eq!(next.id, 1);
    }

    #[tokio::test]
    async fn test_update_missing_speaker_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let err = store
            .update(7, UpdateSpeakerRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_speaker_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let err = store.delete(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_roster_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("speakers.json");

        let store = SpeakerStore::new(path.clone());
        store.create(create_request("persisted")).await.unwrap();
        drop(store);

        let reopened = SpeakerStore::new(path);
        let speakers = reopened.list().await;
        assert_eq!(speakers.len(), 1);
        assert_eq!(speakers[0].name.as_deref(), Some("persisted"));
    }
}
