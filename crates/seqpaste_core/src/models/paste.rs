//! Paste data models and submission validation.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A stored paste as persisted and returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    pub id: i64,
    pub title: String,
    pub text: String,
}

/// Request payload for creating a paste.
///
/// Missing fields deserialize as empty strings so they are rejected by
/// [`validate_paste`] rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePasteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl Paste {
    /// Build a paste row for an already-allocated id.
    pub fn new(id: i64, title: String, text: String) -> Self {
        Self { id, title, text }
    }
}

impl CreatePasteRequest {
    /// Validate this request with [`validate_paste`].
    ///
    /// # Errors
    /// Returns the first failing field check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_paste(&self.title, &self.text)
    }
}

/// Check the required paste fields.
///
/// No trimming, length, or encoding checks are applied; only the empty string
/// is rejected. The title is checked before the text.
///
/// # Errors
/// [`ValidationError::TitleEmpty`] or [`ValidationError::TextEmpty`].
pub fn validate_paste(title: &str, text: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    if text.is_empty() {
        return Err(ValidationError::TextEmpty);
    }
    Ok(())
}
