//! Default language changer.
//!
//! Derives the equivalent URL of the current request in another language
//! from the current page's language-aware URL, honoring the site's
//! hide-untranslated policy.

use std::sync::Arc;

use axum::{body::Body, http::Request};
use tracing::debug;

use super::changer::LanguageChanger;
use super::context::{ActiveLanguage, CurrentPage, PageUrlResolver};
use crate::config::LanguageConfig;

/// Computes per-language URLs for one request.
///
/// Bound to the request's path, current page, and active language at
/// construction; calling it afterwards is a pure function of the target
/// language code.
pub struct DefaultLanguageChanger {
    page: Option<Arc<dyn PageUrlResolver>>,
    config: Arc<LanguageConfig>,

    /// Portion of the request path beyond the page's own path in the
    /// request language. Appended to the target language's page path.
    app_path: String,
}

impl DefaultLanguageChanger {
    /// Build a changer from the request's path and its [`CurrentPage`] and
    /// [`ActiveLanguage`] extensions.
    pub fn from_request(request: &Request<Body>, config: Arc<LanguageConfig>) -> Self {
        let page = request
            .extensions()
            .get::<CurrentPage>()
            .map(|p| Arc::clone(&p.0));
        let active = request
            .extensions()
            .get::<ActiveLanguage>()
            .map(|l| l.0.clone());
        Self::new(request.uri().path(), page, active, config)
    }

    /// Build a changer from explicit request parts.
    ///
    /// The request language is the active language when internationalized
    /// URLs are enabled, else the configured default. The path suffix
    /// beyond the page's own path in that language is derived here; the
    /// path and page do not change for the rest of the request.
    pub fn new(
        path: &str,
        page: Option<Arc<dyn PageUrlResolver>>,
        active_language: Option<String>,
        config: Arc<LanguageConfig>,
    ) -> Self {
        let request_language = if config.i18n_enabled {
            active_language.unwrap_or_else(|| config.default_language.clone())
        } else {
            config.default_language.clone()
        };

        let mut changer = Self {
            page,
            config,
            app_path: String::new(),
        };

        let page_path = changer.page_path(&request_language);
        changer.app_path = if page_path.is_empty() {
            path.to_string()
        } else {
            path.get(page_path.len()..).unwrap_or("").to_string()
        };
        changer
    }

    /// The page's URL in `language`.
    ///
    /// A missing translation is handled here and never escapes: when the
    /// site hides untranslated content for `language` (and i18n is
    /// enabled) the bare language root is returned; otherwise resolution
    /// is retried with fallback to any available translation. A page with
    /// no translations at all degrades to the language root.
    pub fn page_path(&self, language: &str) -> String {
        let Some(page) = &self.page else {
            return self.config.language_root(language);
        };

        match page.absolute_url(language, false) {
            Ok(url) => url,
            Err(_) if self.config.hide_untranslated(language) && self.config.i18n_enabled => {
                format!("/{language}/")
            }
            Err(_) => match page.absolute_url(language, true) {
                Ok(url) => url,
                Err(e) => {
                    debug!(
                        language = %language,
                        error = %e,
                        "page has no translation in any language"
                    );
                    self.config.language_root(language)
                }
            },
        }
    }

    /// The URL of the current view in `language`.
    pub fn url_for(&self, language: &str) -> String {
        format!("{}{}", self.page_path(language), self.app_path)
    }

    /// The request-path suffix appended to every page path.
    pub fn app_path(&self) -> &str {
        &self.app_path
    }
}

impl From<DefaultLanguageChanger> for LanguageChanger {
    fn from(changer: DefaultLanguageChanger) -> Self {
        LanguageChanger::new(move |language| changer.url_for(language))
    }
}
