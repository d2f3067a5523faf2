//! Issue types for locale resource checks.
//!
//! Each issue is a plain value carrying everything a reporter needs to
//! describe it. Issues are collected in detection order and never abort a
//! run; presentation (color, layout) lives in `cli::report`.

use enum_dispatch::enum_dispatch;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
///
/// Declaration order is the order of the per-rule counts in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingFile,
    DuplicateKey,
    MissingKey,
    UnreadableFile,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingFile => write!(f, "missing-file"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::UnreadableFile => write!(f, "unreadable-file"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A locale directory that does not contain the checked resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFileIssue {
    /// Locale directory, as joined from the checked root (e.g. `res/de.lproj`).
    pub dir: String,
    /// The resource file name that was expected inside `dir`.
    pub file: String,
}

/// A key defined more than once in the same resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub file: String,
    pub key: String,
}

/// A key present in some locale but absent from this file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub file: String,
    pub key: String,
}

/// A resource file that exists but could not be read as UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableFileIssue {
    pub file: String,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while checking locale resource files.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingFile(MissingFileIssue),
    DuplicateKey(DuplicateKeyIssue),
    MissingKey(MissingKeyIssue),
    UnreadableFile(UnreadableFileIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// One styled piece of a rendered issue message.
///
/// Reporters decide how each role looks; the issue only says what the
/// text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// A filesystem path (a locale directory or a resource file).
    Path(&'a str),
    /// The thing being reported on: a key or an expected file name.
    Subject(&'a str),
}

impl Segment<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(s) | Segment::Path(s) | Segment::Subject(s) => s,
        }
    }
}

/// Trait for types that can be reported to the CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards it through
/// the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Rule identifier.
    fn rule(&self) -> Rule;

    /// The message as an ordered list of segments.
    fn segments(&self) -> Vec<Segment<'_>>;

    /// Plain-text message, without any styling.
    fn message(&self) -> String {
        self.segments().iter().map(Segment::as_str).collect()
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingFileIssue {
    fn rule(&self) -> Rule {
        Rule::MissingFile
    }

    fn segments(&self) -> Vec<Segment<'_>> {
        vec![
            Segment::Path(&self.dir),
            Segment::Text(" does not contain file "),
            Segment::Subject(&self.file),
        ]
    }
}

impl Report for DuplicateKeyIssue {
    fn rule(&self) -> Rule {
        Rule::DuplicateKey
    }

    fn segments(&self) -> Vec<Segment<'_>> {
        vec![
            Segment::Text("Duplicated key: "),
            Segment::Subject(&self.key),
            Segment::Text(" in "),
            Segment::Path(&self.file),
        ]
    }
}

impl Report for MissingKeyIssue {
    fn rule(&self) -> Rule {
        Rule::MissingKey
    }

    fn segments(&self) -> Vec<Segment<'_>> {
        vec![
            Segment::Text("Missing key: "),
            Segment::Subject(&self.key),
            Segment::Text(" in "),
            Segment::Path(&self.file),
        ]
    }
}

impl Report for UnreadableFileIssue {
    fn rule(&self) -> Rule {
        Rule::UnreadableFile
    }

    fn segments(&self) -> Vec<Segment<'_>> {
        vec![
            Segment::Text("Unable to read "),
            Segment::Path(&self.file),
            Segment::Text(": "),
            Segment::Subject(&self.error),
        ]
    }
}
