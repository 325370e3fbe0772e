//! Hand-written localized paths that bypass the mechanical prefix transform.

use super::normalize::{normalize, with_trailing_slash};
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Exact-match table from a canonical source path to per-locale target paths.
///
/// Source keys are stored in trailing-slash form; lookups canonicalize the
/// incoming path the same way before matching. Target paths are returned
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, HashMap<String, String>>")]
pub struct OverrideTable {
    entries: HashMap<String, HashMap<String, String>>,
}

impl TryFrom<HashMap<String, HashMap<String, String>>> for OverrideTable {
    type Error = ConfigError;

    /// Two raw keys that canonicalize to the same source path (`/about` and
    /// `/about/`) may not both set a target for the same locale.
    fn try_from(raw: HashMap<String, HashMap<String, String>>) -> Result<Self, Self::Error> {
        let mut table = Self::default();
        for (source, targets) in raw {
            let key = canonical_key(&source);
            let existing = table.entries.entry(key.clone()).or_default();
            for (locale, target) in targets {
                if existing.contains_key(&locale) {
                    return Err(ConfigError::DuplicateOverride { path: key, locale });
                }
                existing.insert(locale, target);
            }
        }
        Ok(table)
    }
}

fn canonical_key(source: &str) -> String {
    with_trailing_slash(&normalize(source)).into_owned()
}

impl OverrideTable {
    /// An empty table; every path falls through to the mechanical transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's shipped overrides.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        // Translated slugs
        table.insert("/about/", "fr", "/fr/a-propos/");
        table.insert("/fr/a-propos/", "en", "/about/");

        // Same slug, pinned so they never fall back to the locale root
        table.insert("/contact/", "fr", "/fr/contact/");
        table.insert("/fr/contact/", "en", "/contact/");
        table.insert("/posts/", "fr", "/fr/posts/");
        table.insert("/fr/posts/", "en", "/posts/");
        table
    }

    /// Parse a JSON table of the form `{ "/about/": { "fr": "/fr/a-propos/" } }`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Read a JSON override table from disk.
    ///
    /// Fails on unreadable files, malformed JSON, or source keys that
    /// collide after canonicalization.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let table = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} path overrides from {}",
            table.entries.len(),
            path.display()
        );
        Ok(table)
    }

    /// Register `target` as the `locale` version of `source`.
    pub fn insert(
        &mut self,
        source: &str,
        locale: impl Into<String>,
        target: impl Into<String>,
    ) {
        self.entries
            .entry(canonical_key(source))
            .or_default()
            .insert(locale.into(), target.into());
    }

    /// Target path for `(path, target_locale)`, if an override exists.
    pub fn lookup(&self, path: &str, target_locale: &str) -> Option<&str> {
        let normalized = normalize(path);
        let key = with_trailing_slash(&normalized);
        self.entries
            .get(&*key)
            .and_then(|targets| targets.get(target_locale))
            .map(String::as_str)
    }

    /// Iterate `(source, locale, target)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.entries.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |(locale, target)| (source.as_str(), locale.as_str(), target.as_str()))
        })
    }

    /// Number of source paths with at least one override.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no source path has an override.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_exact_match() {
        let table = OverrideTable::builtin();
        assert_eq!(table.lookup("/about/", "fr"), Some("/fr/a-propos/"));
        assert_eq!(table.lookup("/fr/a-propos/", "en"), Some("/about/"));
    }

    #[test]
    fn test_lookup_adds_trailing_slash() {
        let table = OverrideTable::builtin();
        assert_eq!(table.lookup("/about", "fr"), Some("/fr/a-propos/"));
        assert_eq!(table.lookup("/fr/a-propos", "en"), Some("/about/"));
    }

    #[test]
    fn test_lookup_collapses_separators() {
        let table = OverrideTable::builtin();
        assert_eq!(table.lookup("//about//", "fr"), Some("/fr/a-propos/"));
    }

    #[test]
    fn test_lookup_missing_locale() {
        let table = OverrideTable::builtin();
        assert_eq!(table.lookup("/about/", "es"), None);
        assert_eq!(table.lookup("/about/", "en"), None);
    }

    #[test]
    fn test_lookup_missing_path() {
        let table = OverrideTable::builtin();
        assert_eq!(table.lookup("/blog/", "fr"), None);
    }

    #[test]
    fn test_lookup_is_exact_not_prefix() {
        let table = OverrideTable::builtin();
        assert_eq!(table.lookup("/about/team/", "fr"), None);
    }

    #[test]
    fn test_insert_canonicalizes_source() {
        let mut table = OverrideTable::new();
        table.insert("/a-propos", "en", "/about/");
        assert_eq!(table.lookup("/a-propos/", "en"), Some("/about/"));
        assert_eq!(table.len(), 1);
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_from_json_str() {
        let table = OverrideTable::from_json_str(
            r#"{ "/about/": { "fr": "/fr/a-propos/", "es": "/es/acerca/" }, "/team": { "fr": "/fr/equipe/" } }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("/about/", "es"), Some("/es/acerca/"));
        assert_eq!(table.lookup("/team/", "fr"), Some("/fr/equipe/"));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let result = OverrideTable::from_json_str(r#"{ "/about/": "/fr/a-propos/" }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_json_str_rejects_colliding_keys() {
        // Map iteration order varies between runs, so repeat to cover both orders
        for _ in 0..20 {
            let result = OverrideTable::from_json_str(
                r#"{ "/about": { "fr": "/fr/a/" }, "/about/": { "fr": "/fr/b/" } }"#,
            );
            match result {
                Err(ConfigError::DuplicateOverride { path, locale }) => {
                    assert_eq!(path, "/about/");
                    assert_eq!(locale, "fr");
                }
                other => panic!("expected duplicate override error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_json_str_colliding_keys_distinct_locales() {
        let table = OverrideTable::from_json_str(
            r#"{ "/about": { "fr": "/fr/a-propos/" }, "/about/": { "es": "/es/acerca/" } }"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("/about", "fr"), Some("/fr/a-propos/"));
        assert_eq!(table.lookup("/about/", "es"), Some("/es/acerca/"));
    }

    #[test]
    fn test_try_from_reports_duplicate() {
        let mut raw: HashMap<String, HashMap<String, String>> = HashMap::new();
        raw.insert("//team".to_string(), HashMap::from([("fr".to_string(), "/fr/x/".to_string())]));
        raw.insert("/team/".to_string(), HashMap::from([("fr".to_string(), "/fr/y/".to_string())]));

        match OverrideTable::try_from(raw) {
            Err(ConfigError::DuplicateOverride { path, locale }) => {
                assert_eq!(path, "/team/");
                assert_eq!(locale, "fr");
            }
            other => panic!("expected duplicate override error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{ "/contact/": {{ "fr": "/fr/nous-contacter/" }} }}"#).unwrap();

        let table = OverrideTable::load(file.path()).unwrap();
        assert_eq!(table.lookup("/contact", "fr"), Some("/fr/nous-contacter/"));
    }

    #[test]
    fn test_deserialize_rejects_colliding_keys() {
        let result: Result<OverrideTable, _> =
            serde_json::from_str(r#"{ "/team": { "fr": "/fr/a/" }, "//team/": { "fr": "/fr/b/" } }"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_load_rejects_colliding_keys() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"{{ "/about": {{ "fr": "/fr/a/" }}, "/about/": {{ "fr": "/fr/b/" }} }}"#
        )
        .unwrap();

        let result = OverrideTable::load(file.path());
        assert!(matches!(result, Err(ConfigError::DuplicateOverride { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = OverrideTable::load("/nonexistent/overrides.json");
        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn test_iter_yields_all_triples() {
        let table = OverrideTable::builtin();
        assert_eq!(table.iter().count(), 6);
        assert!(table
            .iter()
            .any(|(s, l, t)| s == "/about/" && l == "fr" && t == "/fr/a-propos/"));
    }
}
