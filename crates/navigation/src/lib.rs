//! Trovato CMS navigation library.
//!
//! Provides the navigation layer used by theme and route code:
//! - Menu trees built from flat menu-link records, with the active trail
//!   marked from the current request path
//! - Tree post-processing for rendering (cutting levels, marking subtrees,
//!   locating the selection)
//! - A per-request "language changer" that maps a language code to the
//!   equivalent URL of the current view, with a default implementation
//!   driven by the current page's language-aware URL

pub mod config;
pub mod error;
pub mod language;
pub mod menu;

pub use config::{LanguageConfig, LanguagePolicy};
pub use error::TranslationNotFound;
