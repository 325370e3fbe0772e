//! Blog content collection and translated-article resolution.
//!
//! Articles that translate each other share a `translation_id` and differ
//! in `lang`.

use crate::config::RoutingConfig;
use crate::error::ContentError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// A blog entry's front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogEntry {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub pub_date: NaiveDate,
    #[serde(default)]
    pub updated_date: Option<NaiveDate>,
    pub lang: String,
    #[serde(default)]
    pub translation_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
}

impl BlogEntry {
    /// The entry's language must be a configured locale and an image needs alt text.
    pub fn validate(&self, config: &RoutingConfig) -> Result<(), ContentError> {
        if !config.is_supported(&self.lang) {
            return Err(ContentError::UnsupportedLang {
                slug: self.slug.clone(),
                lang: self.lang.clone(),
            });
        }
        if self.image.is_some() && self.image_alt.as_deref().map_or(true, str::is_empty) {
            return Err(ContentError::MissingImageAlt {
                slug: self.slug.clone(),
            });
        }
        Ok(())
    }
}

/// Link to another-language version of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedArticleLink {
    pub lang: String,
    pub slug: String,
    pub title: String,
}

/// Source of blog entries.
pub trait ContentCollection {
    fn entries(&self) -> &[BlogEntry];

    fn find_by_slug(&self, slug: &str) -> Option<&BlogEntry> {
        self.entries().iter().find(|e| e.slug == slug)
    }
}

impl ContentCollection for Vec<BlogEntry> {
    fn entries(&self) -> &[BlogEntry] {
        self
    }
}

impl ContentCollection for [BlogEntry] {
    fn entries(&self) -> &[BlogEntry] {
        self
    }
}

/// Load and validate a JSON array of blog entries.
pub fn load_entries(
    path: impl AsRef<Path>,
    config: &RoutingConfig,
) -> Result<Vec<BlogEntry>, ContentError> {
    let path = path.as_ref();
    let raw =
        std::fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
    let entries: Vec<BlogEntry> = serde_json::from_str(&raw)?;

    for entry in &entries {
        entry.validate(config)?;
    }

    let untranslated = entries.iter().filter(|e| e.translation_id.is_none()).count();
    if untranslated > 0 {
        warn!("{} entries have no translation id", untranslated);
    }
    info!("Loaded {} blog entries from {}", entries.len(), path.display());

    Ok(entries)
}

/// Other-language versions of `current`.
///
/// Empty when `current` has no translation id.
pub fn translated_articles<C>(current: &BlogEntry, collection: &C) -> Vec<TranslatedArticleLink>
where
    C: ContentCollection + ?Sized,
{
    let Some(translation_id) = current.translation_id.as_deref() else {
        return Vec::new();
    };

    collection
        .entries()
        .iter()
        .filter(|post| {
            post.translation_id.as_deref() == Some(translation_id) && post.lang != current.lang
        })
        .map(|post| TranslatedArticleLink {
            lang: post.lang.clone(),
            slug: post.slug.clone(),
            title: post.title.clone(),
        })
        .collect()
}
