//! Per-locale string catalogs with a default-locale fallback chain.

use super::metrics::DictionaryMetrics;
use super::strings::{ENGLISH_STRINGS, FRENCH_STRINGS};
use chrono::Datelike;
use std::collections::HashMap;
use tracing::{error, warn};

/// Flat key → string tables, one per locale.
///
/// Lookups never fail: a key missing in the requested locale is served from
/// the default locale, and a key missing there too comes back unchanged.
#[derive(Debug)]
pub struct Dictionary {
    default_locale: String,
    tables: HashMap<String, HashMap<String, String>>,
    metrics: DictionaryMetrics,
}

impl Dictionary {
    /// An empty dictionary falling back to `default_locale`.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            tables: HashMap::new(),
            metrics: DictionaryMetrics::new(),
        }
    }

    /// The built-in English and French catalogs.
    pub fn builtin(default_locale: impl Into<String>) -> Self {
        let mut dictionary = Self::new(default_locale);
        dictionary.insert_table("en", ENGLISH_STRINGS.iter().copied());
        dictionary.insert_table("fr", FRENCH_STRINGS.iter().copied());
        dictionary
    }

    /// Add entries to a locale's table, replacing existing keys.
    pub fn insert_table<I, K, V>(&mut self, locale: impl Into<String>, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.tables.entry(locale.into()).or_default();
        for (key, value) in entries {
            table.insert(key.into(), value.into());
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn table(&self, locale: &str) -> Option<&HashMap<String, String>> {
        self.tables.get(locale)
    }

    /// Locales with a table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    pub fn metrics(&self) -> &DictionaryMetrics {
        &self.metrics
    }

    /// Resolve `key` for `locale`.
    ///
    /// Order: the locale's own value, then the default locale's value
    /// (logged at warn), then the key itself (logged at error).
    pub fn lookup<'a>(&'a self, key: &'a str, locale: &str) -> &'a str {
        if let Some(value) = self.value(locale, key) {
            self.metrics.record_hit();
            return value;
        }

        if let Some(value) = self.value(&self.default_locale, key) {
            warn!("Translation key '{}' not found for lang '{}', using fallback.", key, locale);
            self.metrics.record_fallback();
            return value;
        }

        error!(
            "Translation key '{}' not found for lang '{}' and no fallback available.",
            key, locale
        );
        self.metrics.record_miss();
        key
    }

    /// Look up `key` and substitute `{name}` placeholders from `params`.
    pub fn render(&self, key: &str, locale: &str, params: &[(&str, &str)]) -> String {
        let mut text = self.lookup(key, locale).to_string();
        for (name, value) in params {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// Footer copyright line for the current year.
    pub fn footer_copyright(&self, locale: &str) -> String {
        let year = chrono::Utc::now().year().to_string();
        self.render("footer.copyright", locale, &[("year", year.as_str())])
    }

    /// A translator bound to `locale`.
    pub fn translator<'a>(&'a self, locale: &'a str) -> Translator<'a> {
        Translator {
            dictionary: self,
            locale,
        }
    }

    fn value(&self, locale: &str, key: &str) -> Option<&str> {
        self.tables
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

/// A dictionary paired with one locale, for templates that only need `t(key)`.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    dictionary: &'a Dictionary,
    locale: &'a str,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> &'a str {
        self.locale
    }

    pub fn t(&self, key: &'a str) -> &'a str {
        self.dictionary.lookup(key, self.locale)
    }
}
