//! CLI argument definitions using clap.
//!
//! The command takes the directory holding the locale directories and the
//! resource file name to look for in each of them:
//!
//! ```text
//! strings-check Resources Localizable.strings --check-missing-key
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::ParseMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path that contains the locale (.lproj) directories
    pub dir: PathBuf,

    /// Strings file name to check inside each locale directory
    pub name: String,

    /// Also report keys that some locales define but others lack
    #[arg(long)]
    pub check_missing_key: bool,

    /// Key extraction strategy (overrides config file)
    #[arg(long, value_enum)]
    pub parse_mode: Option<ParseMode>,

    /// Suffix identifying locale directories (overrides config file)
    #[arg(long)]
    pub locale_suffix: Option<String>,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, env = "STRINGS_CHECK_COLOR")]
    pub color: ColorChoice,

    /// Exit with status 1 when any problem is reported
    #[arg(long)]
    pub strict_exit: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}
