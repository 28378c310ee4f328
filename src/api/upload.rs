//! Image upload endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::uploads::{self, StoredImage};
use crate::AppState;

/// POST /api/upload - Accept one image in the multipart field `image`.
///
/// The type filter runs before the field body is collected, so a rejected
/// file never touches the disk. Fields under any other name are skipped.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StoredImage>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        uploads::validate_image(&original_name, &content_type)?;

        let data = field.bytes().await?;
        let stored = uploads::store_image(
            &state.config.uploads_dir,
            &original_name,
            &content_type,
            &data,
        )
        .await?;

        tracing::info!("Stored upload {} ({} bytes)", stored.filename, data.len());
        return Ok(Json(stored));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
