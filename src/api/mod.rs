//! REST API module.
//!
//! Contains all API routes and handlers following the admin frontend
//! contract: plain JSON bodies on success, `{"error": "..."}` on failure.

mod content;
mod speakers;
mod upload;

pub use content::*;
pub use speakers::*;
pub use upload::*;

use serde::Serialize;

/// Confirmation body for operations that return only a message.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
