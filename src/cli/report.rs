//! Report formatting and printing utilities.
//!
//! Issues are printed one per line, in the order they were found. Color is
//! applied here only; the issue values themselves carry plain text.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use colored::Colorize;

use super::run::CommandResult;
use crate::issues::{Issue, Report, Rule, Segment};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Render one issue as a single line.
///
/// With `color`, paths are blue and the reported key or file name is red.
pub fn format_issue(issue: &Issue, color: bool) -> String {
    if !color {
        return issue.message();
    }

    issue
        .segments()
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.normal().to_string(),
            Segment::Path(path) => path.blue().to_string(),
            Segment::Subject(subject) => subject.red().to_string(),
        })
        .collect()
}

/// Print issues to stdout, one per line.
pub fn report(issues: &[Issue], color: bool) {
    report_to(issues, color, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], color: bool, writer: &mut W) {
    for issue in issues {
        let _ = writeln!(writer, "{}", format_issue(issue, color));
    }
}

/// Print the closing summary line, only shown with `--verbose`.
pub fn print_summary(result: &CommandResult) {
    print_summary_to(result, &mut io::stderr().lock());
}

/// Print the summary to a custom writer.
pub fn print_summary_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let files = result.locale_files_checked;
    let files_label = if files == 1 { "file" } else { "files" };
    let problems = result.issues.len();

    let msg = if problems == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} strings {} - no problems found", files, files_label).green()
        )
    } else {
        format!(
            "{} {} {} in {} strings {} ({})",
            FAILURE_MARK.red(),
            problems,
            if problems == 1 { "problem" } else { "problems" }.red(),
            files,
            files_label,
            rule_counts(&result.issues)
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

/// Per-rule problem counts, e.g. `missing-file: 1, duplicate-key: 2`.
fn rule_counts(issues: &[Issue]) -> String {
    let mut counts: BTreeMap<Rule, usize> = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.rule()).or_default() += 1;
    }

    counts
        .iter()
        .map(|(rule, count)| format!("{}: {}", rule.to_string().cyan(), count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print(result: &CommandResult, color: bool, verbose: bool) {
    report(&result.issues, color);

    if verbose {
        print_summary(result);
    }
}
