//! Validation report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Finding;

/// What the metadata validator ended up doing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetadataOutcome {
    /// The staged-file list was empty.
    NothingStaged,
    /// Files were staged, but none of them is an in-scope documentation file.
    NoDocumentation,
    /// At least one documentation file was checked.
    Checked,
}

/// Result of a metadata validation run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct MetadataReport {
    /// Which of the three run shapes occurred.
    pub outcome: MetadataOutcome,
    /// Number of staged files reported by the collaborator.
    pub staged_files: usize,
    /// Number of in-scope documentation files that were checked.
    pub checked_files: usize,
    /// Missing fields and unreadable files.
    pub errors: Vec<Finding>,
    /// Stale dates and non-standard status values.
    pub warnings: Vec<Finding>,
}

impl MetadataReport {
    /// Whether the run passed. Warnings never fail a run.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit code: 0 on success, 1 when any error was recorded.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.ok())
    }
}

/// Result of a link validation run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct LinkReport {
    /// Documentation directories, relative to the project root.
    pub scanned_dirs: Vec<PathBuf>,
    /// Number of markdown files read.
    pub scanned_files: usize,
    /// Number of links extracted, including external ones.
    pub links_found: usize,
    /// Number of files with at least one heading anchor.
    pub files_with_anchors: usize,
    /// Broken cross-file link targets.
    pub errors: Vec<Finding>,
    /// Anchor problems and files that could not be read, in discovery order.
    pub warnings: Vec<Finding>,
}

impl LinkReport {
    /// Whether the run passed. Anchor problems are always warnings.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit code: 0 on success, 1 when any broken link was found.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.ok())
    }
}
