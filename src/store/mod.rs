//! Whole-document JSON persistence.
//!
//! The two JSON files under the data directory are the source of truth for
//! all application data. Each document sits behind a small repository that
//! serializes its read-modify-write sequences on an internal mutex.

mod content;
mod document;
mod seed;
mod speakers;

pub use content::*;
pub use document::*;
pub use seed::*;
pub use speakers::*;
