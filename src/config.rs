use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::Deserialize;

use crate::core::{DEFAULT_LOCALE_SUFFIX, ParseMode};

pub const CONFIG_FILE_NAME: &str = ".stringsrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locale_suffix")]
    pub locale_suffix: String,
    #[serde(default)]
    pub parse_mode: ParseMode,
    #[serde(default)]
    pub check_missing_key: bool,
}

fn default_locale_suffix() -> String {
    DEFAULT_LOCALE_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_suffix: default_locale_suffix(),
            parse_mode: ParseMode::default(),
            check_missing_key: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// An empty locale suffix would match every directory under the root.
    pub fn validate(&self) -> Result<()> {
        if self.locale_suffix.is_empty() {
            bail!("Invalid 'localeSuffix' in {}: must not be empty", CONFIG_FILE_NAME);
        }
        Ok(())
    }
}

/// Searches `start_dir` and its ancestors for the config file.
///
/// The search stops at a directory containing `.git`, or at the filesystem root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config was read from, None when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    // Relative roots like "." have no ancestors to walk; resolve them first.
    let start_dir = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    match find_config_file(&start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
