//! Language configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Per-language policy entry.
#[derive(Debug, Clone)]
pub struct LanguagePolicy {
    /// Language code (e.g., "en", "fr").
    pub code: String,

    /// Override for the site-wide hide-untranslated default.
    pub hide_untranslated: Option<bool>,
}

impl LanguagePolicy {
    /// Create a policy that inherits the site-wide hide-untranslated default.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            hide_untranslated: None,
        }
    }

    /// Keep links to this language visible even for untranslated content.
    #[must_use]
    pub fn show_untranslated(mut self) -> Self {
        self.hide_untranslated = Some(false);
        self
    }
}

/// Site language policy.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Whether internationalized URLs are enabled.
    pub i18n_enabled: bool,

    /// Site default language code.
    pub default_language: String,

    /// Site-wide default for hiding untranslated content.
    hide_untranslated_default: bool,

    /// Known languages with per-language overrides.
    languages: Vec<LanguagePolicy>,
}

impl LanguageConfig {
    /// Create a configuration with the site-wide hide-untranslated default
    /// (untranslated content is hidden).
    pub fn new(
        default_language: impl Into<String>,
        languages: Vec<LanguagePolicy>,
        i18n_enabled: bool,
    ) -> Self {
        Self {
            i18n_enabled,
            default_language: default_language.into(),
            hide_untranslated_default: true,
            languages,
        }
    }

    /// Override the site-wide hide-untranslated default.
    #[must_use]
    pub fn with_hide_untranslated_default(mut self, hide: bool) -> Self {
        self.hide_untranslated_default = hide;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// - `DEFAULT_LANGUAGE` (default: "en")
    /// - `LANGUAGES` — comma-separated known languages (default: the default
    ///   language alone)
    /// - `I18N_ENABLED` (default: "true")
    /// - `HIDE_UNTRANSLATED` — site-wide default (default: "true")
    /// - `SHOW_UNTRANSLATED_LANGUAGES` — comma-separated languages exempt
    ///   from hiding
    pub fn from_env() -> Result<Self> {
        let default_language = env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        let i18n_enabled = env::var("I18N_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .context("I18N_ENABLED must be true or false")?;

        let hide_untranslated_default = env::var("HIDE_UNTRANSLATED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .context("HIDE_UNTRANSLATED must be true or false")?;

        let show_untranslated: Vec<String> = env::var("SHOW_UNTRANSLATED_LANGUAGES")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let codes: Vec<String> = env::var("LANGUAGES")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec![default_language.clone()]);

        let languages = codes
            .into_iter()
            .map(|code| {
                let hide_untranslated = show_untranslated
                    .iter()
                    .any(|s| s == &code)
                    .then_some(false);
                LanguagePolicy {
                    code,
                    hide_untranslated,
                }
            })
            .collect();

        Ok(Self {
            i18n_enabled,
            default_language,
            hide_untranslated_default,
            languages,
        })
    }

    /// Whether links to untranslated content are hidden for `language`.
    ///
    /// Per-language overrides win; unknown languages use the site default.
    pub fn hide_untranslated(&self, language: &str) -> bool {
        self.languages
            .iter()
            .find(|l| l.code == language)
            .and_then(|l| l.hide_untranslated)
            .unwrap_or(self.hide_untranslated_default)
    }

    /// Whether `language` is a known site language.
    pub fn is_known(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l.code == language)
    }

    /// The root path for `language`: `/<language>/` with internationalized
    /// URLs enabled, `/` otherwise.
    pub fn language_root(&self, language: &str) -> String {
        if self.i18n_enabled {
            format!("/{language}/")
        } else {
            "/".to_string()
        }
    }
}
