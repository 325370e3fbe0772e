//! Locale detection from a request path.

use super::normalize::{normalize, segments};
use crate::config::RoutingConfig;
use tracing::trace;

/// Return the locale carried by the path's first segment, or the default locale.
///
/// Matching is case-sensitive: `/FR/...` is not French when the configured
/// code is `fr`, and resolves to the default locale like any other
/// unrecognized segment.
pub fn detect_locale<'a>(path: &str, config: &'a RoutingConfig) -> &'a str {
    let path = normalize(path);

    if let Some(first) = segments(&path).next() {
        if let Some(locale) = config.locales().iter().find(|l| l.as_str() == first) {
            return locale;
        }
        trace!(path = %path, segment = first, "No locale prefix, using default locale");
    }

    config.default_locale()
}
