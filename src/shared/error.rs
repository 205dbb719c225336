use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a clean comparison apart from
/// one that found differences, and both apart from real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - command completed (and no differences, if that was requested)
    Success = 0,
    /// Differences were found and `--fail-on-changes` was given
    DifferencesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, malformed dependency output, bad report, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DifferencesDetected => write!(f, "Differences Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors produced while turning dependency-tree text into a [`DependencyTree`].
///
/// These are values handed back to the caller; a failed parse never yields a
/// partial tree.
///
/// [`DependencyTree`]: crate::dependency_analysis::domain::DependencyTree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeParseError {
    #[error("Dependency output is empty")]
    EmptyInput,

    #[error("Malformed dependency line {line_number}: '{line}'\nReason: {reason}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Dependency line {line_number} is nested at level {level} but no open dependency exists one level above it")]
    MissingParent { line_number: usize, level: usize },

    #[error("Configuration '{configuration}' was not found in the dependency output\n\n💡 Hint: Check the configuration name (e.g. releaseCompileClasspath) or the build variant")]
    SectionNotFound { configuration: String },
}

impl TreeParseError {
    /// Whether this error only means "there was nothing to parse".
    pub fn is_empty_input(&self) -> bool {
        matches!(self, TreeParseError::EmptyInput)
    }

    /// Attaches a line number to a classifier error, which only knows the line text.
    pub(crate) fn at_line(self, line_number: usize) -> Self {
        match self {
            TreeParseError::MalformedLine { line, reason, .. } => TreeParseError::MalformedLine {
                line_number,
                line,
                reason,
            },
            other => other,
        }
    }
}

/// Application-specific errors for report collection and comparison.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hints next to each variant.
#[derive(Debug, Error)]
pub enum DepDiffError {
    #[error("Dependency output not found: {path}\n\n💡 Hint: Save the output of `./gradlew app:dependencies` to a file and pass its path")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the report file exists and is a regular file")]
    ReportReadError { path: PathBuf, details: String },

    #[error("Failed to parse report: {path}\nDetails: {details}\n\n💡 Hint: Reports must be JSON files produced by the `collect` command")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Output file already exists: {path}\n\n💡 Hint: Pass --overwrite to replace it")]
    OutputExists { path: PathBuf },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
