#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for language-changer middleware.
//!
//! Drives a real axum `Router` through `tower::ServiceExt::oneshot` to
//! verify that installed changers reach handlers and responses pass
//! through unchanged.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use trovato_navigation::language::{
    ActiveLanguage, CurrentPage, LanguageChanger, PageUrlResolver, install_language_changer,
};
use trovato_navigation::{LanguageConfig, LanguagePolicy, TranslationNotFound};

/// Page with fixed per-language URLs; fallback returns the first one.
struct StaticPage {
    translations: Vec<(&'static str, &'static str)>,
}

impl PageUrlResolver for StaticPage {
    fn absolute_url(&self, language: &str, fallback: bool) -> Result<String, TranslationNotFound> {
        if let Some((_, url)) = self.translations.iter().find(|(lang, _)| *lang == language) {
            return Ok((*url).to_string());
        }
        if fallback
            && let Some((_, url)) = self.translations.first()
        {
            return Ok((*url).to_string());
        }
        Err(TranslationNotFound::new(language))
    }
}

fn site_config() -> Arc<LanguageConfig> {
    Arc::new(LanguageConfig::new(
        "en",
        vec![LanguagePolicy::new("en"), LanguagePolicy::new("fr")],
        true,
    ))
}

/// Handler echoing the French URL computed by the installed changer.
async fn french_url(Extension(changer): Extension<LanguageChanger>) -> String {
    changer.url_for("fr")
}

#[tokio::test]
async fn installed_changer_reaches_handler() {
    let changer = LanguageChanger::new(|language| format!("/{language}/produits/"));
    let app = Router::new()
        .route("/shop/", get(french_url))
        .layer(from_fn_with_state(changer, install_language_changer));

    let response = app
        .oneshot(Request::builder().uri("/shop/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"/fr/produits/");
}

#[tokio::test]
async fn response_passes_through_unchanged() {
    async fn created() -> impl IntoResponse {
        (StatusCode::CREATED, "made it")
    }

    let changer = LanguageChanger::new(|language| format!("/{language}/"));
    let app = Router::new()
        .route("/make/", get(created))
        .layer(from_fn_with_state(changer, install_language_changer));

    let response = app
        .oneshot(Request::builder().uri("/make/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"made it");
}

#[tokio::test]
#[allow(deprecated)]
async fn simple_language_changer_installs_default() {
    use trovato_navigation::language::simple_language_changer;

    let page = CurrentPage(Arc::new(StaticPage {
        translations: vec![("en", "/en/shop/"), ("fr", "/fr/boutique/")],
    }));

    // Layers added later run first: the page and active-language
    // extensions must be present before the changer middleware executes.
    let app = Router::new()
        .route("/en/shop/item/", get(french_url))
        .layer(from_fn_with_state(site_config(), simple_language_changer))
        .layer(Extension(page))
        .layer(Extension(ActiveLanguage("en".to_string())));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/en/shop/item/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"/fr/boutique/item/");
}

#[tokio::test]
#[allow(deprecated)]
async fn default_changer_hides_untranslated_page() {
    use trovato_navigation::language::simple_language_changer;

    let page = CurrentPage(Arc::new(StaticPage {
        translations: vec![("en", "/en/shop/")],
    }));

    let app = Router::new()
        .route("/en/shop/", get(french_url))
        .layer(from_fn_with_state(site_config(), simple_language_changer))
        .layer(Extension(page))
        .layer(Extension(ActiveLanguage("en".to_string())));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/en/shop/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"/fr/");
}
