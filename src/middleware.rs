//! Request middleware that attaches the detected locale to each page request.
//!
//! Static assets and API routes are skipped entirely: they never reach
//! locale detection and carry no [`RequestLocale`] extension.

use crate::config::RoutingConfig;
use crate::routing::detect_locale;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// Locale detected for the current request, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLocale(pub String);

static ASSET_EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();

const EXCLUDED_PREFIXES: &[&str] = &["/assets/", "/api/"];
const EXCLUDED_PATHS: &[&str] = &["/favicon.ico", "/robots.txt"];

/// True for paths that must bypass locale detection: static assets,
/// API routes and well-known root files.
pub fn is_excluded_path(path: &str) -> bool {
    if EXCLUDED_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return true;
    }
    if EXCLUDED_PATHS.contains(&path) {
        return true;
    }

    let regex = ASSET_EXTENSION_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\.(css|js|png|jpg|jpeg|gif|svg|ico|woff|woff2|ttf|eot|webp|avif)$")
            .expect("asset extension pattern is valid")
    });
    regex.is_match(path)
}

/// axum middleware: detect the locale of page requests.
///
/// Install with `axum::middleware::from_fn_with_state(config, detect_locale_layer)`.
pub async fn detect_locale_layer(
    State(config): State<Arc<RoutingConfig>>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if is_excluded_path(path) {
        trace!(path, "Skipping locale detection");
    } else {
        let locale = detect_locale(path, &config).to_string();
        request.extensions_mut().insert(RequestLocale(locale));
    }

    next.run(request).await
}
