//! Consistency checks for string catalogs and path overrides.
//!
//! Run once at startup; findings are reported, never enforced, since every
//! lookup already has a defined fallback.

use super::Dictionary;
use crate::config::RoutingConfig;
use crate::routing::OverrideTable;

/// Validation report containing errors and warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that produce wrong output (untranslated text, dead links)
    pub errors: Vec<String>,

    /// Suspicious but harmless findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append another report's findings.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that every locale's catalog covers the default locale's keys.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate a dictionary.
    ///
    /// - error: a default-locale key is missing from another locale
    /// - error: a value is empty or whitespace-only
    /// - warning: a key exists only outside the default locale
    pub fn validate(dictionary: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default_locale = dictionary.default_locale();

        let Some(reference) = dictionary.table(default_locale) else {
            report.errors.push(format!(
                "Default locale '{}' has no string table",
                default_locale
            ));
            return report;
        };

        let mut reference_keys: Vec<&String> = reference.keys().collect();
        reference_keys.sort();

        for locale in dictionary.locales() {
            let Some(table) = dictionary.table(locale) else {
                continue;
            };

            let mut keys: Vec<(&String, &String)> = table.iter().collect();
            keys.sort();
            for (key, value) in keys {
                if value.trim().is_empty() {
                    report
                        .errors
                        .push(format!("Empty value for '{}' in '{}'", key, locale));
                }
                if locale != default_locale && !reference.contains_key(key) {
                    report.warnings.push(format!(
                        "Key '{}' in '{}' is not defined for default locale '{}'",
                        key, locale, default_locale
                    ));
                }
            }

            if locale == default_locale {
                continue;
            }
            for key in &reference_keys {
                if !table.contains_key(*key) {
                    report
                        .errors
                        .push(format!("Missing key '{}' for locale '{}'", key, locale));
                }
            }
        }

        report
    }
}

/// Checks override entries against the routing config.
pub struct OverrideValidator;

impl OverrideValidator {
    /// Validate an override table.
    ///
    /// - error: target locale is not supported
    /// - error: target path does not start with `/`
    /// - warning: target path equals its source path
    pub fn validate(overrides: &OverrideTable, config: &RoutingConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut entries: Vec<(&str, &str, &str)> = overrides.iter().collect();
        entries.sort_unstable();

        for (source, locale, target) in entries {
            if !config.is_supported(locale) {
                report.errors.push(format!(
                    "Override '{}' targets unsupported locale '{}'",
                    source, locale
                ));
            }
            if !target.starts_with('/') {
                report.errors.push(format!(
                    "Override '{}' → '{}' for '{}' is not an absolute path",
                    source, target, locale
                ));
            }
            if target == source {
                report.warnings.push(format!(
                    "Override '{}' for '{}' points at itself",
                    source, locale
                ));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ValidationReport Tests ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_merge() {
        let mut report = ValidationReport::new();
        let mut other = ValidationReport::new();
        other.errors.push("e".to_string());
        other.warnings.push("w".to_string());
        report.merge(other);
        assert!(report.has_errors());
        assert!(report.has_warnings());
    }

    // ==================== DictionaryValidator Tests ====================

    #[test]
    fn test_builtin_dictionary_is_clean() {
        let report = DictionaryValidator::validate(&Dictionary::builtin("en"));
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_key_is_error() {
        let mut dictionary = Dictionary::builtin("en");
        dictionary.insert_table("en", [("nav.search", "Search")]);

        let report = DictionaryValidator::validate(&dictionary);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("nav.search"));
        assert!(report.errors[0].contains("'fr'"));
    }

    #[test]
    fn test_blank_value_is_error() {
        let mut dictionary = Dictionary::builtin("en");
        dictionary.insert_table("fr", [("nav.home", "   ")]);

        let report = DictionaryValidator::validate(&dictionary);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Empty value"));
    }

    #[test]
    fn test_extra_key_is_warning() {
        let mut dictionary = Dictionary::builtin("en");
        dictionary.insert_table("fr", [("nav.extra", "En plus")]);

        let report = DictionaryValidator::validate(&dictionary);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("nav.extra"));
    }

    #[test]
    fn test_missing_default_table_is_error() {
        let mut dictionary = Dictionary::new("de");
        dictionary.insert_table("en", [("nav.home", "Home")]);

        let report = DictionaryValidator::validate(&dictionary);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'de'"));
    }

    // ==================== OverrideValidator Tests ====================

    #[test]
    fn test_builtin_overrides_are_clean() {
        let report = OverrideValidator::validate(&OverrideTable::builtin(), &RoutingConfig::default());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_unsupported_target_locale_is_error() {
        let mut overrides = OverrideTable::new();
        overrides.insert("/about/", "es", "/es/acerca/");

        let report = OverrideValidator::validate(&overrides, &RoutingConfig::default());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'es'"));
    }

    #[test]
    fn test_relative_target_is_error() {
        let mut overrides = OverrideTable::new();
        overrides.insert("/about/", "fr", "fr/a-propos/");

        let report = OverrideValidator::validate(&overrides, &RoutingConfig::default());
        assert!(report.has_errors());
        assert!(report.errors[0].contains("absolute"));
    }

    #[test]
    fn test_self_target_is_warning() {
        let mut overrides = OverrideTable::new();
        overrides.insert("/fr/contact/", "fr", "/fr/contact/");

        let report = OverrideValidator::validate(&overrides, &RoutingConfig::default());
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
    }
}
