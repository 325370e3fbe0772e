//! Internationalization (i18n) module: string catalogs and page helpers.
//!
//! # Architecture
//!
//! - `registry`: display names for known locale codes
//! - `strings`: built-in English and French catalogs
//! - `dictionary`: lookup with default-locale fallback, plus a bound `Translator`
//! - `context`: per-page view of the current locale and its alternates
//! - `validator`: catalog and override consistency checks
//! - `metrics`: lookup hit/fallback/miss counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::Dictionary;
//!
//! let dictionary = Dictionary::builtin("en");
//! assert_eq!(dictionary.lookup("nav.home", "fr"), "Accueil");
//!
//! let t = dictionary.translator("fr");
//! assert_eq!(t.t("nav.about"), "À Propos");
//! ```

mod context;
mod dictionary;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use context::{I18nContext, SwitchLink};
pub use dictionary::{Dictionary, Translator};
pub use metrics::{DictionaryMetrics, MetricsReport};
pub use registry::{LocaleInfo, LocaleRegistry};
pub use strings::{ENGLISH_STRINGS, FRENCH_STRINGS};
pub use validator::{DictionaryValidator, OverrideValidator, ValidationReport};
