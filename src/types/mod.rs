pub mod error;
pub mod page;

pub use error::{ErrorCategory, ErrorClassifier, LlmError, Result, WikiError};
pub use page::{DocSet, Page, SourceUnit, WikiSite, is_reserved_page, page_name_for};

// =============================================================================
// Domain Newtypes
// =============================================================================

use std::fmt;

/// Text returned by the generative backend.
///
/// Opaque and unvalidated: nothing about its structure (headings, link
/// syntax) is guaranteed. Kept apart from Markdown built locally so the
/// two are never confused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedText(String);

impl GeneratedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GeneratedText {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for GeneratedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
