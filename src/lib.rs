//! Locale-aware routing for multi-locale static sites.
//!
//! Maps a URL path to its equivalent in another locale, detects the locale
//! a path belongs to, and serves localized strings with a default-locale
//! fallback.

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod routing;
pub mod server;
