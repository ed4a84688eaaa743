//! Supported language entries.

use serde::{Deserialize, Serialize};

/// A language the platform can present content in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language tag (e.g., "en-US").
    pub code: String,
    /// Human-readable label, in the language itself.
    pub label: String,
}

impl Language {
    /// Creates a new language entry.
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}
