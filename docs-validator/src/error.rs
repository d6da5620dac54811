//! Findings and error types for documentation validation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// How much a finding matters for the overall result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks success: the run exits non-zero.
    Error,
    /// Informational only.
    Warning,
}

/// A single problem found in a documentation file.
///
/// Findings are values, not `Err`s: a validator collects them and keeps
/// going, so one unreadable or broken file never aborts a run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Finding {
    /// The file the finding belongs to (display form, usually root-relative).
    pub file: PathBuf,
    /// Error or warning.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    /// Create an error finding.
    #[must_use]
    pub fn error(file: &Path, message: impl Into<String>) -> Self {
        Self {
            file: file.to_owned(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning finding.
    #[must_use]
    pub fn warning(file: &Path, message: impl Into<String>) -> Self {
        Self {
            file: file.to_owned(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Format the finding for human-readable output: `{file}: {message}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: {}", self.file.display(), self.message)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_human_readable())
    }
}

/// Why a file could not be read for scanning.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Opening or reading failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The file exceeded the configured maximum size.
    #[error("file exceeds maximum size of {limit} bytes")]
    TooLarge {
        /// Configured limit in bytes.
        limit: u64,
    },
    /// The content is not valid UTF-8.
    #[error("file is not valid UTF-8")]
    InvalidEncoding,
}

/// Failure of the staged-file query.
///
/// Never surfaces to the user as a failure: the metadata validator degrades
/// it to an empty file list and logs it.
#[derive(Debug, thiserror::Error)]
pub enum StagedFilesError {
    /// `git` could not be spawned.
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    /// `git` ran but reported failure.
    #[error("git diff --cached exited with {status}: {stderr}")]
    Failed {
        /// Exit status as printed by the OS.
        status: String,
        /// Trimmed standard error of the git process.
        stderr: String,
    },
    /// `git` output was not valid UTF-8.
    #[error("git output is not valid UTF-8")]
    InvalidOutput,
}
