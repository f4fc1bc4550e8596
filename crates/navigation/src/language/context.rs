//! Per-request context values for language handling.
//!
//! Stored in request extensions for the lifetime of one request and
//! discarded with it.

use std::sync::Arc;

use crate::error::TranslationNotFound;

/// The negotiated language of the current request.
///
/// Inserted by the host's language-negotiation middleware before any
/// navigation code runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLanguage(pub String);

/// Language-aware URL resolution for a content page.
///
/// The seam to the content layer. The language is passed explicitly: with
/// `fallback` set, any available translation may satisfy the request;
/// without it, a missing title fails with [`TranslationNotFound`].
pub trait PageUrlResolver: Send + Sync {
    /// The page's URL in `language`.
    fn absolute_url(
        &self,
        language: &str,
        fallback: bool,
    ) -> Result<String, TranslationNotFound>;
}

/// The content page the current request resolved to, if any.
#[derive(Clone)]
pub struct CurrentPage(pub Arc<dyn PageUrlResolver>);

impl std::fmt::Debug for CurrentPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentPage").finish()
    }
}
