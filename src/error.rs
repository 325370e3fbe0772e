//! Error types for configuration and content loading.
//!
//! The routing operations themselves are total and never fail; only building
//! the immutable inputs they run on (routing config, override table, content
//! collection) can go wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building routing configuration or override tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one locale must be configured")]
    NoLocales,

    #[error("locale codes must not be empty")]
    EmptyLocaleCode,

    #[error("default locale '{default}' is not in the configured locales {locales:?}")]
    DefaultLocaleNotSupported {
        default: String,
        locales: Vec<String>,
    },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("override source '{path}' is defined more than once for locale '{locale}'")]
    DuplicateOverride { path: String, locale: String },

    #[error("malformed override table")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading or validating blog entries.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed content collection")]
    Json(#[from] serde_json::Error),

    #[error("entry '{slug}': lang '{lang}' is not a configured locale")]
    UnsupportedLang { slug: String, lang: String },

    #[error("entry '{slug}': 'image_alt' is required when 'image' is provided")]
    MissingImageAlt { slug: String },
}
