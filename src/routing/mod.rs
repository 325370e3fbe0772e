//! Locale-aware path routing.
//!
//! Locales are encoded as a leading path segment (`/fr/blog/`), except for
//! the default locale which carries no prefix unless the routing config asks
//! for one. A small override table covers pages whose localized slug is not
//! a mechanical prefix swap (`/about/` ↔ `/fr/a-propos/`).
//!
//! # Architecture
//!
//! - `normalize`: separator collapse and whitespace trimming
//! - `detect`: locale carried by a path's first segment
//! - `overrides`: exact-match table of hand-written localized paths
//! - `translate`: the path translator used to build language-switch links
//!
//! Every operation here is pure and total. The only inputs besides the path
//! are the immutable [`RoutingConfig`](crate::config::RoutingConfig) and
//! [`OverrideTable`], both built once at startup.
//!
//! # Example
//!
//! ```rust,ignore
//! let config = RoutingConfig::default();
//! let overrides = OverrideTable::builtin();
//! let translator = PathTranslator::new(&config, &overrides);
//!
//! assert_eq!(translator.translate("fr", "/blog/", Some("en")), "/fr/blog/");
//! assert_eq!(detect_locale("/fr/blog/", &config), "fr");
//! ```

mod detect;
mod normalize;
mod overrides;
mod translate;

pub use detect::detect_locale;
pub use normalize::{normalize, segments, with_trailing_slash};
pub use overrides::OverrideTable;
pub use translate::PathTranslator;
