//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `run`: the check pipeline driver
//! - `report`: colored/plain issue output
//! - `exit_status`: process exit status

use anyhow::Result;

pub mod args;
mod exit_status;
pub mod report;
pub mod run;

pub use args::{Arguments, ColorChoice};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let color = match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
            true
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
            false
        }
        ColorChoice::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
    };

    let result = run::run(&args)?;
    report::print(&result, color, args.verbose);

    Ok(ExitStatus::from_issue_count(result.issues.len(), args.strict_exit))
}
