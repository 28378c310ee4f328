//! Content API endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::ContentDocument;
use crate::AppState;

/// Response for a successful content replacement, echoing the new document.
#[derive(Debug, Serialize)]
pub struct ContentUpdated {
    pub message: String,
    pub content: ContentDocument,
}

/// GET /api/content - Read the full copy dictionary.
pub async fn get_content(State(state): State<AppState>) -> Result<Json<ContentDocument>, AppError> {
    match state.content.get().await {
        Some(content) => Ok(Json(content)),
        None => Err(AppError::Storage("Failed to read content".to_string())),
    }
}

/// PUT /api/content (also POST /api/save-content) - Replace the whole
/// document verbatim. No merge, no shape validation.
pub async fn replace_content(
    State(state): State<AppState>,
    Json(content): Json<ContentDocument>,
) -> Result<Json<ContentUpdated>, AppError> {
    match state.content.replace(&content).await {
        Ok(()) => Ok(Json(ContentUpdated {
            message: "Content updated successfully".to_string(),
            content,
        })),
        Err(_) => Err(AppError::Storage("Failed to update content".to_string())),
    }
}
