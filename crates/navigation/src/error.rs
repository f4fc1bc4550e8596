//! Navigation error types.

use thiserror::Error;

/// A page has no title in the requested language.
///
/// Consumed by the default language changer's hide-untranslated/fallback
/// handling; template code never sees it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no translation for language '{language}'")]
pub struct TranslationNotFound {
    /// The language code that failed to resolve.
    pub language: String,
}

impl TranslationNotFound {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}
