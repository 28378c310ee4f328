//! Page-copy content document.
//!
//! The document is conventionally `{ locale: { key: text } }` with `en` and
//! `fr` locales, but the backend never enforces that shape: administrative
//! writes replace the whole document verbatim, so it is carried as opaque
//! JSON.

use serde_json::Value;

/// The bilingual copy dictionary, stored and served as-is.
pub type ContentDocument = Value;
