use crate::error::ConfigError;
use anyhow::{Context, Result};

/// Immutable locale routing policy shared by every routing operation.
///
/// Built once at startup and passed by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
    default_locale: String,
    /// Supported locale codes in declaration order, without duplicates
    locales: Vec<String>,
    prefix_default_locale: bool,
}

impl RoutingConfig {
    /// Build a routing config, checking that the default locale is supported.
    ///
    /// Duplicate codes are dropped while keeping the first occurrence, so
    /// listings derived from the config stay in declaration order.
    pub fn new<I, S>(
        default_locale: impl Into<String>,
        locales: I,
        prefix_default_locale: bool,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default_locale = default_locale.into();

        let mut unique: Vec<String> = Vec::new();
        for code in locales {
            let code = code.into();
            if code.is_empty() {
                return Err(ConfigError::EmptyLocaleCode);
            }
            if !unique.contains(&code) {
                unique.push(code);
            }
        }

        if unique.is_empty() {
            return Err(ConfigError::NoLocales);
        }
        if !unique.contains(&default_locale) {
            return Err(ConfigError::DefaultLocaleNotSupported {
                default: default_locale,
                locales: unique,
            });
        }

        Ok(Self {
            default_locale,
            locales: unique,
            prefix_default_locale,
        })
    }

    /// Locale served without a URL prefix unless `prefix_default_locale` is set.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Supported locale codes in declaration order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Whether default-locale pages also live under `/<default>/`.
    pub fn prefix_default_locale(&self) -> bool {
        self.prefix_default_locale
    }

    /// Case-sensitive set membership.
    pub fn is_supported(&self, code: &str) -> bool {
        self.locales.iter().any(|l| l == code)
    }

    pub fn is_default(&self, code: &str) -> bool {
        self.default_locale == code
    }

    /// Supported locales other than `current`, in declaration order.
    pub fn other_locales<'a>(&'a self, current: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.locales
            .iter()
            .map(String::as_str)
            .filter(move |l| *l != current)
    }
}

impl Default for RoutingConfig {
    /// English default, French secondary, unprefixed default locale.
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string(), "fr".to_string()],
            prefix_default_locale: false,
        }
    }
}

/// Process configuration for the preview server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub routing: RoutingConfig,

    /// JSON override table; the built-in table is used when unset
    pub overrides_file: Option<String>,

    /// JSON array of blog entries
    pub content_file: Option<String>,

    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_locale = var("SITE_DEFAULT_LOCALE").unwrap_or_else(|| "en".to_string());
        let locales: Vec<String> = var("SITE_LOCALES")
            .unwrap_or_else(|| "en,fr".to_string())
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        let prefix_default_locale = match var("SITE_PREFIX_DEFAULT_LOCALE") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .with_context(|| format!("SITE_PREFIX_DEFAULT_LOCALE must be true or false, got '{raw}'"))?,
            None => false,
        };

        let routing = RoutingConfig::new(default_locale, locales, prefix_default_locale)
            .context("Invalid locale routing configuration")?;

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => 8080,
        };

        Ok(Self {
            routing,
            overrides_file: var("SITE_OVERRIDES_FILE").filter(|v| !v.is_empty()),
            content_file: var("SITE_CONTENT_FILE").filter(|v| !v.is_empty()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    // ==================== RoutingConfig Tests ====================

    #[test]
    fn test_new_valid_config() {
        let config = RoutingConfig::new("en", ["en", "fr", "es"], false).unwrap();
        assert_eq!(config.default_locale(), "en");
        assert_eq!(config.locales(), &["en", "fr", "es"]);
        assert!(!config.prefix_default_locale());
    }

    #[test]
    fn test_new_rejects_unsupported_default() {
        let result = RoutingConfig::new("de", ["en", "fr"], false);
        assert!(matches!(
            result,
            Err(ConfigError::DefaultLocaleNotSupported { .. })
        ));
    }

    #[test]
    fn test_new_rejects_empty_locales() {
        let result = RoutingConfig::new("en", Vec::<String>::new(), false);
        assert!(matches!(result, Err(ConfigError::NoLocales)));
    }

    #[test]
    fn test_new_rejects_empty_code() {
        let result = RoutingConfig::new("en", ["en", ""], false);
        assert!(matches!(result, Err(ConfigError::EmptyLocaleCode)));
    }

    #[test]
    fn test_new_deduplicates_keeping_order() {
        let config = RoutingConfig::new("en", ["fr", "en", "fr"], false).unwrap();
        assert_eq!(config.locales(), &["fr", "en"]);
    }

    #[test]
    fn test_is_supported_is_case_sensitive() {
        let config = RoutingConfig::default();
        assert!(config.is_supported("fr"));
        assert!(!config.is_supported("FR"));
        assert!(!config.is_supported("es"));
    }

    #[test]
    fn test_other_locales_excludes_current() {
        let config = RoutingConfig::new("en", ["en", "fr", "es"], false).unwrap();
        let others: Vec<&str> = config.other_locales("fr").collect();
        assert_eq!(others, vec!["en", "es"]);
    }

    #[test]
    fn test_default_config() {
        let config = RoutingConfig::default();
        assert!(config.is_default("en"));
        assert!(!config.is_default("fr"));
        assert!(config.is_supported(config.default_locale()));
    }

    // ==================== AppConfig Tests ====================

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.routing, RoutingConfig::default());
        assert_eq!(config.port, 8080);
        assert!(config.overrides_file.is_none());
        assert!(config.content_file.is_none());
    }

    #[test]
    fn test_app_config_reads_all_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SITE_DEFAULT_LOCALE", "fr"),
            ("SITE_LOCALES", "fr, en ,es"),
            ("SITE_PREFIX_DEFAULT_LOCALE", "true"),
            ("SITE_OVERRIDES_FILE", "overrides.json"),
            ("SITE_CONTENT_FILE", "posts.json"),
            ("PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(config.routing.default_locale(), "fr");
        assert_eq!(config.routing.locales(), &["fr", "en", "es"]);
        assert!(config.routing.prefix_default_locale());
        assert_eq!(config.overrides_file.as_deref(), Some("overrides.json"));
        assert_eq!(config.content_file.as_deref(), Some("posts.json"));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_app_config_invalid_port() {
        let result = AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    fn test_app_config_invalid_prefix_flag() {
        let result = AppConfig::from_lookup(lookup_from(&[("SITE_PREFIX_DEFAULT_LOCALE", "yes")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_app_config_default_not_in_locales() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("SITE_DEFAULT_LOCALE", "de"),
            ("SITE_LOCALES", "en,fr"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_app_config_empty_file_vars_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[("SITE_OVERRIDES_FILE", "")])).unwrap();
        assert!(config.overrides_file.is_none());
    }
}
