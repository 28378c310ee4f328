//! Speaker profile model and its create/update request shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A speaker profile shown on the public site.
///
/// Text fields are optional because the admin UI submits partial records;
/// absent fields stay absent in the stored JSON rather than serializing as
/// null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub key_topics: Vec<String>,
    /// Emoji glyph or `/uploads/...` path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Request body for creating a speaker. The id is never client-supplied;
/// an `id` field in the body is ignored by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpeakerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub topics: Value,
    #[serde(default)]
    pub key_topics: Value,
    #[serde(default)]
    pub image: Option<String>,
}

/// Request body for updating a speaker. Fields left out of the body keep
/// their stored values (shallow merge).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpeakerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub topics: Value,
    #[serde(default)]
    pub key_topics: Value,
    #[serde(default)]
    pub image: Option<String>,
}

/// Validate an arbitrary JSON value as a topic list.
///
/// The admin UI is supposed to submit arrays of strings, but nothing enforces
/// that client-side. Only array-shaped values are accepted; anything else
/// yields `None` so the caller can fall back to an empty list (create) or the
/// stored list (update). Non-string elements are stringified rather than
/// dropped.
pub fn as_string_list(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    })
}

impl Speaker {
    /// Build a new record from a create request under a store-assigned id.
    pub fn from_create(id: u64, request: CreateSpeakerRequest) -> Self {
        Self {
            id,
            name: request.name,
            title: request.title,
            bio: request.bio,
            topics: as_string_list(&request.topics).unwrap_or_default(),
            key_topics: as_string_list(&request.key_topics).unwrap_or_default(),
            image: request.image,
        }
    }

    /// Shallow-merge an update over this record. The id is never touched;
    /// topic lists are replaced only when the request supplies an actual
    /// array.
    pub fn apply_update(&mut self, request: UpdateSpeakerRequest) {
        if request.name.is_some() {
            self.name = request.name;
        }
        if request.title.is_some() {
            self.title = request.title;
        }
        if request.bio.is_some() {
            self.bio = request.bio;
        }
        if let Some(topics) = as_string_list(&request.topics) {
            self.topics = topics;
        }
        if let Some(key_topics) = as_string_list(&request.key_topics) {
            self.key_topics = key_topics;
        }
        if request.image.is_some() {
            self.image = request.image;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_string_list_accepts_arrays() {
        assert_eq!(
            as_string_list(&json!(["a", "b"])),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(as_string_list(&json!([])), Some(vec![]));
    }

    #[test]
    fn test_as_string_list_rejects_non_arrays() {
        assert_eq!(as_string_list(&json!("not a list")), None);
        assert_eq!(as_string_list(&json!(42)), None);
        assert_eq!(as_string_list(&json!({"a": 1})), None);
        assert_eq!(as_string_list(&Value::Null), None);
    }

    #[test]
    fn test_as_string_list_stringifies_mixed_elements() {
        assert_eq!(
            as_string_list(&json!(["a", 1])),
            Some(vec!["a".to_string(), "1".to_string()])
        );
    }

    #[test]
    fn test_from_create_coerces_missing_topics() {
        let request: CreateSpeakerRequest =
            serde_json::from_value(json!({"name": "A"})).unwrap();
        let speaker = Speaker::from_create(1, request);
        assert_eq!(speaker.id, 1);
        assert_eq!(speaker.name.as_deref(), Some("A"));
        assert!(speaker.topics.is_empty());
        assert!(speaker.key_topics.is_empty());
    }

    #[test]
    fn test_apply_update_keeps_unspecified_fields() {
        let mut speaker = Speaker {
            id: 3,
            name: Some("Old".into()),
            title: Some("CEO".into()),
            bio: None,
            topics: vec!["Art".into()],
            key_topics: vec![],
            image: None,
        };

        let request: UpdateSpeakerRequest =
            serde_json::from_value(json!({"name": "New", "topics": "oops"})).unwrap();
        speaker.apply_update(request);

        assert_eq!(speaker.id, 3);
        assert_eq!(speaker.name.as_deref(), Some("New"));
        assert_eq!(speaker.title.as_deref(), Some("CEO"));
        // Non-array topics value leaves the stored list alone
        assert_eq!(speaker.topics, vec!["Art".to_string()]);
    }

    #[test]
    fn test_apply_update_replaces_array_wholesale() {
        let mut speaker = Speaker {
            id: 1,
            name: None,
            title: None,
            bio: None,
            topics: vec!["Art".into(), "Sport".into()],
            key_topics: vec!["Keynote".into()],
            image: None,
        };

        let request: UpdateSpeakerRequest =
            serde_json::from_value(json!({"topics": ["Music"]})).unwrap();
        speaker.apply_update(request);

        assert_eq!(speaker.topics, vec!["Music".to_string()]);
        assert_eq!(speaker.key_topics, vec!["Keynote".to_string()]);
    }

    #[test]
    fn test_speaker_serializes_camel_case_without_absent_fields() {
        let speaker = Speaker {
            id: 1,
            name: Some("A".into()),
            title: None,
            bio: None,
            topics: vec![],
            key_topics: vec![],
            image: None,
        };
        let value = serde_json::to_value(&speaker).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "A", "topics": [], "keyTopics": []}));
    }

    #[test]
    fn test_create_request_ignores_client_id() {
        let request: CreateSpeakerRequest =
            serde_json::from_value(json!({"id": 99, "name": "A"})).unwrap();
        let speaker = Speaker::from_create(2, request);
        assert_eq!(speaker.id, 2);
    }
}
