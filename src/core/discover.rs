//! Locale directory discovery.
//!
//! Lists the locale directories directly under a root and sorts them into
//! those that hold the checked resource file and those that do not.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::issues::{Issue, MissingFileIssue};

/// Default suffix identifying a locale directory.
pub const DEFAULT_LOCALE_SUFFIX: &str = ".lproj";

/// A locale whose resource file is present and can be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckableLocale {
    /// Locale directory name, e.g. `fr.lproj`.
    pub name: String,
    /// Resolved path of the resource file inside the locale directory.
    pub file_path: PathBuf,
}

impl CheckableLocale {
    pub fn file_path_str(&self) -> String {
        self.file_path.to_string_lossy().to_string()
    }
}

#[derive(Debug, Default)]
pub struct DiscoverResult {
    /// Locales holding the resource file, sorted by directory name.
    pub checkable: Vec<CheckableLocale>,
    /// One `MissingFile` issue per locale lacking the file, in the same order.
    pub issues: Vec<Issue>,
}

/// Lists the names of the locale directories directly under `root`, sorted.
///
/// A root that cannot be listed yields an empty list. Entries that are not
/// directories, or whose names are not UTF-8, are ignored.
pub fn list_locale_dirs(root: &Path, suffix: &str) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(suffix))
        .collect();
    names.sort();
    names
}

/// Discovers the locale directories under `root` and checks each for `file_name`.
pub fn discover_locales(root: &Path, file_name: &str, suffix: &str) -> DiscoverResult {
    let mut result = DiscoverResult::default();

    for name in list_locale_dirs(root, suffix) {
        let dir = root.join(&name);
        let file_path = dir.join(file_name);

        if file_path.exists() {
            result.checkable.push(CheckableLocale { name, file_path });
        } else {
            result.issues.push(Issue::MissingFile(MissingFileIssue {
                dir: dir.to_string_lossy().to_string(),
                file: file_name.to_string(),
            }));
        }
    }

    result
}
