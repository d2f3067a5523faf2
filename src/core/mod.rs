//! Core checking engine.
//!
//! A run goes through three phases:
//!
//! 1. **Discover** (`discover`): list locale directories and find which hold
//!    the resource file.
//! 2. **Extract** (`parsers`): read each resource file into a `KeySet`,
//!    reporting duplicate keys.
//! 3. **Reconcile** (`crate::rules`): compare the key sets across locales.

pub mod discover;
pub mod parsers;

pub use discover::{CheckableLocale, DEFAULT_LOCALE_SUFFIX, discover_locales};
pub use parsers::strings::{ExtractedKeys, KeySet, ParseMode, extract_keys, parse_strings_file};

/// The key set of one checkable locale, ready for cross-locale rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleKeys {
    /// Path of the locale's resource file, as reported in issues.
    pub file_path: String,
    pub keys: KeySet,
}
