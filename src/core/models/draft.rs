//! Submission draft
//!
//! What a user fills in before a record exists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while validating a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    /// `source` was empty
    #[error("news source is required")]
    MissingSource,

    /// `content` was empty
    #[error("news content is required")]
    MissingContent,
}

/// A news item waiting to be submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDraft {
    /// Who published the news (required)
    pub source: String,

    /// Free-text category (optional, empty when unset)
    #[serde(default)]
    pub category: String,

    /// The news content (required)
    pub content: String,
}

impl NewsDraft {
    /// Create a draft
    #[must_use]
    pub fn new(source: impl Into<String>, category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            category: category.into(),
            content: content.into(),
        }
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.source.trim().is_empty() {
            return Err(DraftError::MissingSource);
        }
        if self.content.trim().is_empty() {
            return Err(DraftError::MissingContent);
        }
        Ok(())
    }

    /// Plaintext handed to the encryption step
    pub fn plaintext(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
