//! Speaker API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::MessageBody;
use crate::errors::AppError;
use crate::models::{CreateSpeakerRequest, Speaker, UpdateSpeakerRequest};
use crate::AppState;

/// GET /api/speakers - List all speakers.
pub async fn list_speakers(State(state): State<AppState>) -> Json<Vec<Speaker>> {
    Json(state.speakers.list().await)
}

/// GET /api/speakers/:id - Get a single speaker.
pub async fn get_speaker(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Speaker>, AppError> {
    match state.speakers.get(id).await {
        Some(speaker) => Ok(Json(speaker)),
        None => Err(AppError::NotFound("Speaker not found".to_string())),
    }
}

/// POST /api/speakers - Create a new speaker.
pub async fn create_speaker(
    State(state): State<AppState>,
    Json(request): Json<CreateSpeakerRequest>,
) -> Result<(StatusCode, Json<Speaker>), AppError> {
    match state.speakers.create(request).await {
        Ok(speaker) => Ok((StatusCode::CREATED, Json(speaker))),
        Err(_) => Err(AppError::Storage("Failed to create speaker".to_string())),
    }
}

/// PUT /api/speakers/:id - Update a speaker.
pub async fn update_speaker(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateSpeakerRequest>,
) -> Result<Json<Speaker>, AppError> {
    match state.speakers.update(id, request).await {
        Ok(speaker) => Ok(Json(speaker)),
        Err(err @ AppError::NotFound(_)) => Err(err),
        Err(_) => Err(AppError::Storage("Failed to update speaker".to_string())),
    }
}

/// DELETE /api/speakers/:id - Delete a speaker.
pub async fn delete_speaker(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageBody>, AppError> {
    match state.speakers.delete(id).await {
        Ok(()) => Ok(Json(MessageBody::new("Speaker deleted successfully"))),
        Err(err @ AppError::NotFound(_)) => Err(err),
        Err(_) => Err(AppError::Storage("Failed to delete speaker".to_string())),
    }
}
