//! Speaker photo upload handling.
//!
//! One image per request, validated before any byte reaches the disk, then
//! persisted under a generated collision-resistant name. Uploaded files are
//! not tracked anywhere; the returned URL is the only handle the caller
//! gets.

use std::path::Path;

use rand::Rng;
use serde::Serialize;

use crate::errors::AppError;

/// Upload size ceiling: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image extensions, compared case-insensitively.
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

/// Accepted declared content types. Both this and the extension must match.
const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// Result of a persisted upload.
#[derive(Debug, Clone, Serialize)]
pub struct StoredImage {
    pub url: String,
    pub filename: String,
}

/// Reject anything that is not an allow-listed image by both extension and
/// declared content type.
pub fn validate_image(original_name: &str, content_type: &str) -> Result<(), AppError> {
    let extension_ok = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    let mime_ok = ALLOWED_MIME_TYPES.contains(&content_type.to_ascii_lowercase().as_str());

    if extension_ok && mime_ok {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Only image files are allowed".to_string(),
        ))
    }
}

/// `{millis}-{random}{original extension}`. Collisions are possible in
/// principle but never checked for.
fn generate_filename(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!("{}-{}{}", millis, suffix, extension)
}

/// Validate and persist one uploaded image, creating the destination
/// directory if needed. Returns the public URL and bare filename.
pub async fn store_image(
    uploads_dir: &Path,
    original_name: &str,
    content_type: &str,
    data: &[u8],
) -> Result<StoredImage, AppError> {
    validate_image(original_name, content_type)?;

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge("File too large".to_string()));
    }

    tokio::fs::create_dir_all(uploads_dir).await?;

    let filename = generate_filename(original_name);
    tokio::fs::write(uploads_dir.join(&filename), data).await?;

    Ok(StoredImage {
        url: format!("/uploads/{}", filename),
        filename,
    })
}
