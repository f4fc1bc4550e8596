//! Per-request language switching.
//!
//! Routes declare how the current view maps to other languages by
//! installing a [`LanguageChanger`] on the request; theme code reads it to
//! render the language chooser. CMS-managed pages are covered by the
//! [`DefaultLanguageChanger`], which derives the target URL from the
//! current page's language-aware URL and the site's hide-untranslated
//! policy.

mod changer;
mod context;
mod default_changer;

#[allow(deprecated)]
pub use changer::simple_language_changer;
pub use changer::{
    LanguageChanger, install_language_changer, language_changer, language_changer_or_default,
    set_language_changer,
};
pub use context::{ActiveLanguage, CurrentPage, PageUrlResolver};
pub use default_changer::DefaultLanguageChanger;
