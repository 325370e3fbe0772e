//! Per-page i18n view used by templates and the preview server.

use super::{Dictionary, LocaleRegistry, Translator};
use crate::config::RoutingConfig;
use crate::routing::{OverrideTable, PathTranslator};
use serde::Serialize;

/// A link to the current page in another locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchLink {
    pub locale: String,
    /// Native language name, or the code when unknown
    pub label: String,
    pub href: String,
}

/// Everything a page needs to render locale-dependent parts.
#[derive(Debug, Clone, Copy)]
pub struct I18nContext<'a> {
    current_locale: &'a str,
    config: &'a RoutingConfig,
    overrides: &'a OverrideTable,
    dictionary: &'a Dictionary,
}

impl<'a> I18nContext<'a> {
    pub fn new(
        current_locale: &'a str,
        config: &'a RoutingConfig,
        overrides: &'a OverrideTable,
        dictionary: &'a Dictionary,
    ) -> Self {
        Self {
            current_locale,
            config,
            overrides,
            dictionary,
        }
    }

    pub fn current_locale(&self) -> &'a str {
        self.current_locale
    }

    pub fn is_default_locale(&self) -> bool {
        self.config.is_default(self.current_locale)
    }

    /// Configured locales except the current one, in config order.
    pub fn other_locales(&self) -> Vec<&'a str> {
        self.config.other_locales(self.current_locale).collect()
    }

    pub fn translator(&self) -> Translator<'a> {
        self.dictionary.translator(self.current_locale)
    }

    pub fn t(&self, key: &'a str) -> &'a str {
        self.dictionary.lookup(key, self.current_locale)
    }

    /// Language-switch links for the page at `path`.
    pub fn switch_links(&self, path: &str) -> Vec<SwitchLink> {
        let translator = PathTranslator::new(self.config, self.overrides);
        let registry = LocaleRegistry::get();

        self.other_locales()
            .into_iter()
            .map(|locale| SwitchLink {
                locale: locale.to_string(),
                label: registry.label(locale).to_string(),
                href: translator.translate(locale, path, Some(self.current_locale)),
            })
            .collect()
    }
}
