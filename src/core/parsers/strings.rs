//! Key extraction for `.strings` resource files.
//!
//! Entries have the form `"<key>" = "<value>";`, one per line. Two parsing
//! strategies are available:
//!
//! - [`ParseMode::HeuristicLineScan`] finds the first literal `" = "` on a
//!   line and takes everything between the line's first character and that
//!   delimiter as the key. It does not understand escaped quotes in keys,
//!   multi-line entries, or comments that happen to contain `" = "`: the
//!   line `// comment "x" = "y"` yields the key `/ comment "x`.
//! - [`ParseMode::StrictGrammar`] only accepts lines that are a complete
//!   quoted-key, quoted-value entry terminated by `;`.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use clap::ValueEnum;
use regex::Regex;
use serde::Deserialize;

use crate::issues::{DuplicateKeyIssue, Issue};

/// Byte order mark some editors write at the start of UTF-8 files.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// The literal separator between a quoted key and a quoted value.
const ENTRY_DELIMITER: &str = "\" = \"";

static STRICT_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"((?:[^"\\]|\\.)*)"\s*=\s*"(?:[^"\\]|\\.)*"\s*;\s*$"#).unwrap()
});

/// Strategy used to recognize key/value entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum ParseMode {
    /// Substring scan for `" = "`; permissive, accepts malformed lines.
    #[default]
    #[value(name = "heuristic")]
    #[serde(rename = "heuristic")]
    HeuristicLineScan,
    /// Whole-line grammar match; lines that are not complete entries are skipped.
    #[value(name = "strict")]
    #[serde(rename = "strict")]
    StrictGrammar,
}

/// The unique keys defined in one resource file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet(HashSet<String>);

impl KeySet {
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Inserts a key, returning false if it was already present.
    fn insert(&mut self, key: &str) -> bool {
        if self.0.contains(key) {
            return false;
        }
        self.0.insert(key.to_string())
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Keys extracted from one file, with the duplicates found along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedKeys {
    pub keys: KeySet,
    /// `DuplicateKey` issues in line order.
    pub issues: Vec<Issue>,
}

/// Reads and extracts the keys of the resource file at `path`.
pub fn parse_strings_file(path: &Path, mode: ParseMode) -> Result<ExtractedKeys> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read strings file: {:?}", path))?;

    Ok(extract_keys(&content, &path.to_string_lossy(), mode))
}

/// Extracts the keys of `content`, reporting repeats against `file_path`.
///
/// The first occurrence of a key is the one kept; each later occurrence
/// produces one `DuplicateKey` issue. A leading byte order mark is not part
/// of the first line.
pub fn extract_keys(content: &str, file_path: &str, mode: ParseMode) -> ExtractedKeys {
    let mut result = ExtractedKeys::default();
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

    for line in content.split('\n').filter(|line| !line.is_empty()) {
        let Some(key) = entry_key(line, mode) else {
            continue;
        };

        if !result.keys.insert(key) {
            result.issues.push(Issue::DuplicateKey(DuplicateKeyIssue {
                file: file_path.to_string(),
                key: key.to_string(),
            }));
        }
    }

    result
}

/// Returns the key of `line`, or None when the line is not an entry.
pub fn entry_key(line: &str, mode: ParseMode) -> Option<&str> {
    match mode {
        ParseMode::HeuristicLineScan => heuristic_key(line),
        ParseMode::StrictGrammar => strict_key(line),
    }
}

fn heuristic_key(line: &str) -> Option<&str> {
    let end = line.find(ENTRY_DELIMITER)?;
    // The first character is taken to be the opening quote.
    let start = line.chars().next()?.len_utf8();
    if end < start {
        return None;
    }
    Some(&line[start..end])
}

fn strict_key(line: &str) -> Option<&str> {
    STRICT_ENTRY_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
