//! Missing key detection rule.
//!
//! Detects keys defined in at least one locale but absent from another.
//! Every locale is compared against the union of all locales' keys, so no
//! locale is treated as the reference.

use std::collections::HashSet;

use crate::{
    core::LocaleKeys,
    issues::{Issue, MissingKeyIssue},
};

/// Union of the keys of every locale.
pub fn union_keys(locales: &[LocaleKeys]) -> HashSet<&str> {
    locales
        .iter()
        .flat_map(|locale| locale.keys.iter().map(String::as_str))
        .collect()
}

/// Keys of `union` that `locale` does not define, sorted.
pub fn missing_keys<'a>(union: &HashSet<&'a str>, locale: &LocaleKeys) -> Vec<&'a str> {
    let mut missing: Vec<&str> = union
        .iter()
        .filter(|key| !locale.keys.contains(key))
        .copied()
        .collect();
    missing.sort_unstable();
    missing
}

/// Check every locale for keys that other locales define.
///
/// Issues are grouped per locale in the order `locales` is given, keys
/// sorted within a locale. With a single locale nothing can be missing.
pub fn check_missing_keys(locales: &[LocaleKeys]) -> Vec<Issue> {
    let union = union_keys(locales);

    locales
        .iter()
        .flat_map(|locale| {
            missing_keys(&union, locale).into_iter().map(|key| {
                Issue::MissingKey(MissingKeyIssue {
                    file: locale.file_path.clone(),
                    key: key.to_string(),
                })
            })
        })
        .collect()
}
