//! Preview server: exposes locale detection, path translation and
//! translated-article lookup over HTTP for templates and link checkers.

use crate::config::{AppConfig, RoutingConfig};
use crate::content::{load_entries, translated_articles, BlogEntry, ContentCollection};
use crate::i18n::{Dictionary, DictionaryValidator, I18nContext, OverrideValidator, SwitchLink};
use crate::middleware::{detect_locale_layer, RequestLocale};
use crate::routing::{OverrideTable, PathTranslator};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Site navigation: dictionary key and default-locale path.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("nav.home", "/"),
    ("nav.blog", "/posts/"),
    ("nav.about", "/about/"),
    ("nav.contact", "/contact/"),
];

/// Immutable data shared by all requests.
#[derive(Debug)]
pub struct AppState {
    pub routing: Arc<RoutingConfig>,
    pub overrides: OverrideTable,
    pub dictionary: Dictionary,
    pub articles: Vec<BlogEntry>,
}

impl AppState {
    pub fn new(routing: RoutingConfig, overrides: OverrideTable, articles: Vec<BlogEntry>) -> Self {
        let dictionary = Dictionary::builtin(routing.default_locale());
        Self {
            routing: Arc::new(routing),
            overrides,
            dictionary,
            articles,
        }
    }

    /// Load overrides and content named by the config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let overrides = match &config.overrides_file {
            Some(path) => OverrideTable::load(path)
                .with_context(|| format!("Failed to load path overrides from {path}"))?,
            None => OverrideTable::builtin(),
        };

        let articles = match &config.content_file {
            Some(path) => load_entries(path, &config.routing)
                .with_context(|| format!("Failed to load blog entries from {path}"))?,
            None => Vec::new(),
        };

        Ok(Self::new(config.routing.clone(), overrides, articles))
    }

    /// Log catalog and override findings. Returns false if any error was found.
    pub fn report_validation(&self) -> bool {
        let mut report = DictionaryValidator::validate(&self.dictionary);
        report.merge(OverrideValidator::validate(&self.overrides, &self.routing));

        for warning in &report.warnings {
            warn!("{}", warning);
        }
        for err in &report.errors {
            error!("{}", err);
        }
        if report.is_clean() {
            info!("String catalogs and path overrides are consistent");
        }

        !report.has_errors()
    }

    fn context<'a>(&'a self, locale: &'a str) -> I18nContext<'a> {
        I18nContext::new(locale, &self.routing, &self.overrides, &self.dictionary)
    }
}

#[derive(Debug, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// Locale information for one page.
#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub path: String,
    pub locale: String,
    pub is_default_locale: bool,
    pub nav: Vec<NavItem>,
    pub alternates: Vec<SwitchLink>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/metrics", get(metrics))
        .route("/api/articles/:slug/translations", get(article_translations))
        .fallback(get(page_links))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.routing),
            detect_locale_layer,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn metrics(State(state): State<Arc<AppState>>) -> Json<crate::i18n::MetricsReport> {
    Json(state.dictionary.metrics().report())
}

async fn article_translations(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<crate::content::TranslatedArticleLink>>, StatusCode> {
    let article = state.articles.find_by_slug(&slug).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(translated_articles(article, &state.articles)))
}

async fn page_links(
    State(state): State<Arc<AppState>>,
    locale: Option<Extension<RequestLocale>>,
    uri: Uri,
) -> Result<Json<PageLinks>, StatusCode> {
    // Excluded paths (assets, API) carry no locale and are not pages
    let Some(Extension(RequestLocale(locale))) = locale else {
        return Err(StatusCode::NOT_FOUND);
    };

    let path = uri.path();
    let ctx = state.context(&locale);
    let translator = PathTranslator::new(&state.routing, &state.overrides);
    let default_locale = state.routing.default_locale();

    let nav = NAV_ITEMS
        .iter()
        .map(|(key, href)| NavItem {
            label: ctx.t(key).to_string(),
            href: translator.translate(&locale, href, Some(default_locale)),
        })
        .collect();

    Ok(Json(PageLinks {
        path: path.to_string(),
        is_default_locale: ctx.is_default_locale(),
        nav,
        alternates: ctx.switch_links(path),
        locale: locale.clone(),
    }))
}
