//! Locale registry: display metadata for known locale codes.
//!
//! Which locales a site serves is decided by
//! [`RoutingConfig`](crate::config::RoutingConfig); this registry only knows
//! how to name them in language switchers.

use std::sync::OnceLock;

/// Display metadata for a locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    /// ISO 639-1 code (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français")
    pub native_name: &'static str,
}

/// Read-only registry of known locales.
pub struct LocaleRegistry {
    locales: Vec<LocaleInfo>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the registry instance, initializing it on first call.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: known_locales(),
        })
    }

    /// Look up metadata by exact, case-sensitive code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleInfo> {
        self.locales.iter().find(|l| l.code == code)
    }

    pub fn list_all(&self) -> Vec<&LocaleInfo> {
        self.locales.iter().collect()
    }

    /// Label for a language switcher: the native name, or the code itself
    /// when the registry does not know it.
    pub fn label<'a>(&'a self, code: &'a str) -> &'a str {
        match self.get_by_code(code) {
            Some(info) => info.native_name,
            None => code,
        }
    }
}

fn known_locales() -> Vec<LocaleInfo> {
    vec![
        LocaleInfo {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LocaleInfo {
            code: "fr",
            name: "French",
            native_name: "Français",
        },
        LocaleInfo {
            code: "es",
            name: "Spanish",
            native_name: "Español",
        },
        LocaleInfo {
            code: "de",
            name: "German",
            native_name: "Deutsch",
        },
    ]
}
