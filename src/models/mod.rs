//! Data models for the Passerelles backend.
//!
//! These models match the admin frontend's JSON shapes exactly, camelCase
//! field names included.

mod content;
mod speaker;

pub use content::*;
pub use speaker::*;
