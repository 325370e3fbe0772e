//! Cross-locale path translation.
//!
//! Given a target locale, the current path and the (possibly unknown) current
//! locale, produce the equivalent path in the target locale. The current path
//! is classified into one of four shapes:
//!
//! | Shape                  | Condition                                              | Result                                  |
//! |------------------------|--------------------------------------------------------|-----------------------------------------|
//! | Overridden             | override exists for `(path/, target)`                  | override literal                        |
//! | Default, unprefixed    | current is the default locale, first segment is not it | identity, or prefix + forced `/`        |
//! | Prefixed, matching     | first segment is a supported locale equal to current   | drop or swap prefix, `/` preserved      |
//! | Indeterminate          | anything else (e.g. unknown current locale)            | root of the target locale               |

use super::normalize::{normalize, segments};
use super::overrides::OverrideTable;
use crate::config::RoutingConfig;
use tracing::debug;

/// Translates paths between locales under one routing config and override table.
///
/// Holds only shared references, so it is `Copy` and can be created per call.
#[derive(Debug, Clone, Copy)]
pub struct PathTranslator<'a> {
    config: &'a RoutingConfig,
    overrides: &'a OverrideTable,
}

impl<'a> PathTranslator<'a> {
    /// Bind a translator to a routing config and override table.
    pub fn new(config: &'a RoutingConfig, overrides: &'a OverrideTable) -> Self {
        Self { config, overrides }
    }

    /// The routing config this translator was built with.
    pub fn config(&self) -> &'a RoutingConfig {
        self.config
    }

    /// Path of `current_path` in `target`.
    ///
    /// Total: every input yields a path. `current_locale` is `None` when the
    /// caller does not know which locale the page is in; without an override
    /// this resolves to the target locale's root.
    pub fn translate(&self, target: &str, current_path: &str, current_locale: Option<&str>) -> String {
        let path = normalize(current_path);

        if let Some(hit) = self.overrides.lookup(&path, target) {
            return hit.to_string();
        }

        let segs: Vec<&str> = segments(&path).collect();
        let first = segs.first().copied();
        let trailing = path.ends_with('/');

        match current_locale {
            Some(current) if self.config.is_default(current) && first != Some(current) => {
                self.from_unprefixed(target, current, &path, &segs)
            }
            Some(current) if first == Some(current) && self.config.is_supported(current) => {
                self.from_prefixed(target, &segs, trailing)
            }
            _ => {
                debug!(
                    path = %path,
                    current = ?current_locale,
                    target_locale = target,
                    "Cannot place path in a locale, using target locale root"
                );
                self.locale_root(target)
            }
        }
    }

    /// The path is in the default locale and has no prefix.
    ///
    /// Switching into any other locale adds the prefix and always ends in `/`.
    fn from_unprefixed(&self, target: &str, current: &str, path: &str, segs: &[&str]) -> String {
        if target == current {
            return path.to_string();
        }

        if segs.is_empty() {
            format!("/{target}/")
        } else {
            format!("/{target}/{}/", segs.join("/"))
        }
    }

    /// The path starts with the current locale's prefix.
    ///
    /// The trailing slash of the input is kept, except that a bare locale
    /// root always ends in `/`.
    fn from_prefixed(&self, target: &str, segs: &[&str], trailing: bool) -> String {
        let rest = &segs[1..];
        let slash = if trailing { "/" } else { "" };

        if self.config.is_default(target) && !self.config.prefix_default_locale() {
            if rest.is_empty() {
                return "/".to_string();
            }
            return format!("/{}{slash}", rest.join("/"));
        }

        if rest.is_empty() {
            format!("/{target}/")
        } else {
            format!("/{target}/{}{slash}", rest.join("/"))
        }
    }

    fn locale_root(&self, target: &str) -> String {
        if self.config.is_default(target) && !self.config.prefix_default_locale() {
            "/".to_string()
        } else {
            format!("/{target}/")
        }
    }
}
