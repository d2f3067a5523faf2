//! The check pipeline: discover → extract → reconcile.
//!
//! Issues come out in report order: missing files (locale order), then the
//! per-file extraction problems (locale order, line order within a file),
//! then missing keys grouped per locale.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::args::Arguments;
use crate::{
    config::{Config, load_config},
    core::{
        CheckableLocale, ExtractedKeys, LocaleKeys, ParseMode, discover_locales,
        parse_strings_file,
    },
    issues::{Issue, UnreadableFileIssue},
    rules::check_missing_keys,
};

/// Settings for one run, after merging arguments over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub root: PathBuf,
    pub file_name: String,
    pub locale_suffix: String,
    pub parse_mode: ParseMode,
    pub check_missing_key: bool,
}

impl CheckOptions {
    pub fn resolve(args: &Arguments, config: Config) -> Self {
        Self {
            root: args.dir.clone(),
            file_name: args.name.clone(),
            locale_suffix: args.locale_suffix.clone().unwrap_or(config.locale_suffix),
            parse_mode: args.parse_mode.unwrap_or(config.parse_mode),
            check_missing_key: args.check_missing_key || config.check_missing_key,
        }
    }
}

/// Result of a check run.
#[derive(Debug, Default)]
pub struct CommandResult {
    /// All issues, in report order.
    pub issues: Vec<Issue>,
    /// Number of locale directories found under the root.
    pub locales_found: usize,
    /// Number of resource files whose keys were extracted.
    pub locale_files_checked: usize,
}

pub fn run(args: &Arguments) -> Result<CommandResult> {
    let loaded = load_config(&args.dir)?;
    if args.verbose
        && let Some(source) = &loaded.source
    {
        eprintln!("{} {}", "Using config".green().bold(), source.display());
    }

    let options = CheckOptions::resolve(args, loaded.config);
    Ok(check(&options, args.verbose))
}

/// Run every check described by `options`.
pub fn check(options: &CheckOptions, verbose: bool) -> CommandResult {
    let discovered = discover_locales(&options.root, &options.file_name, &options.locale_suffix);
    let locales_found = discovered.checkable.len() + discovered.issues.len();
    let mut issues = discovered.issues;

    if verbose {
        eprintln!(
            "{} {} locale(s) in {}, {} with {}",
            "Checking".green().bold(),
            locales_found,
            options.root.display(),
            discovered.checkable.len(),
            options.file_name
        );
    }

    // Files are independent until reconciliation; `collect` keeps locale order.
    let extracted: Vec<(&CheckableLocale, Result<ExtractedKeys>)> = discovered
        .checkable
        .par_iter()
        .map(|locale| (locale, parse_strings_file(&locale.file_path, options.parse_mode)))
        .collect();

    let mut locale_keys = Vec::with_capacity(extracted.len());
    for (locale, result) in extracted {
        let file_path = locale.file_path_str();
        match result {
            Ok(ExtractedKeys {
                keys,
                issues: file_issues,
            }) => {
                if verbose {
                    eprintln!("  {}: {} key(s) in {}", locale.name, keys.len(), file_path);
                }
                issues.extend(file_issues);
                locale_keys.push(LocaleKeys { file_path, keys });
            }
            Err(err) => {
                if verbose {
                    eprintln!("{} {}: {:#}", "warning:".bold().yellow(), locale.name, err);
                }
                issues.push(Issue::UnreadableFile(UnreadableFileIssue {
                    file: file_path,
                    error: err.root_cause().to_string(),
                }));
            }
        }
    }

    if options.check_missing_key {
        issues.extend(check_missing_keys(&locale_keys));
    }

    CommandResult {
        issues,
        locales_found,
        locale_files_checked: locale_keys.len(),
    }
}
