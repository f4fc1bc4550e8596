//! Language-changer registry and middleware.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Extensions, Request},
    middleware::Next,
    response::Response,
};

use super::default_changer::DefaultLanguageChanger;
use crate::config::LanguageConfig;

/// Callable mapping a language code to the URL of the current view in that
/// language.
///
/// Cheap to clone. Once installed on a request it is treated as a pure
/// function of the language code for the remainder of that request.
#[derive(Clone)]
pub struct LanguageChanger(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl LanguageChanger {
    /// Wrap a URL-producing function.
    ///
    /// Typically the function resolves an internationalized slug:
    ///
    /// ```
    /// # use trovato_navigation::language::LanguageChanger;
    /// let changer = LanguageChanger::new(|language| format!("/{language}/produits/"));
    /// assert_eq!(changer.url_for("fr"), "/fr/produits/");
    /// ```
    pub fn new(func: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(func))
    }

    /// The URL of the current view in `language`.
    pub fn url_for(&self, language: &str) -> String {
        (self.0)(language)
    }
}

impl std::fmt::Debug for LanguageChanger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageChanger").finish()
    }
}

/// Install `changer` on the request. Overwrites any previous changer.
pub fn set_language_changer(extensions: &mut Extensions, changer: LanguageChanger) {
    extensions.insert(changer);
}

/// The changer installed on the request, if any.
pub fn language_changer(extensions: &Extensions) -> Option<&LanguageChanger> {
    extensions.get::<LanguageChanger>()
}

/// The installed changer, or a default changer built from the request.
///
/// Theme code uses this when rendering the language chooser: routes that
/// installed nothing get [`DefaultLanguageChanger`] behavior.
pub fn language_changer_or_default(
    request: &Request<Body>,
    config: &Arc<LanguageConfig>,
) -> LanguageChanger {
    if let Some(changer) = language_changer(request.extensions()) {
        return changer.clone();
    }
    DefaultLanguageChanger::from_request(request, Arc::clone(config)).into()
}

/// Middleware installing a fixed language changer before the inner service
/// runs. The response passes through unchanged.
///
/// Apply with `from_fn_with_state` on routes that carry internationalized
/// slugs:
///
/// ```ignore
/// Router::new()
///     .route("/shop/{slug}", get(product_view))
///     .layer(middleware::from_fn_with_state(changer, install_language_changer))
/// ```
pub async fn install_language_changer(
    State(changer): State<LanguageChanger>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    set_language_changer(request.extensions_mut(), changer);
    next.run(request).await
}

/// Middleware installing the default language changer for the request.
#[deprecated(
    note = "the default changer is built automatically when none is installed; rely on language_changer_or_default instead"
)]
pub async fn simple_language_changer(
    State(config): State<Arc<LanguageConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let changer = DefaultLanguageChanger::from_request(&request, config);
    set_language_changer(request.extensions_mut(), changer.into());
    next.run(request).await
}
