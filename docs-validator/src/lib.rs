//! # docs-validator
//!
//! Documentation quality checks for markdown trees.
//!
//! Two independent validators share the extraction code:
//!
//! - **Metadata**: staged documentation files must carry a bold-labeled header
//!   (`**Last Updated**`, `**Status**`, `**Owner**`, `**Document Type**`).
//! - **Links**: every relative link under the documentation directories must
//!   point at an existing file; anchors are checked against heading anchors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use docs_validator::{LinkConfig, validate_links};
//!
//! let report = validate_links(LinkConfig::new(PathBuf::from(".")));
//! println!("Links found: {}", report.links_found);
//! println!("Broken links: {}", report.errors.len());
//! std::process::exit(report.exit_code());
//! ```

mod config;
mod error;
pub mod format;
pub mod links;
pub mod metadata;
pub mod output;
mod report;
pub mod strategy;

pub use config::{
    DEFAULT_MAX_FILE_SIZE, LINK_DOCS_DIRS, LinkConfig, METADATA_DOCS_DIRS, MetadataConfig,
    VALID_STATUSES, project_root_from_exe,
};
pub use error::{Finding, ReadError, Severity, StagedFilesError};
pub use links::{AnchorCache, LinkRecord, LinkTarget, LinkValidator};
pub use metadata::{MetadataValidator, should_check_file};
pub use report::{LinkReport, MetadataOutcome, MetadataReport};
pub use strategy::staged::{GitStagedFiles, StagedFiles};

use chrono::NaiveDate;

/// Check the metadata header of every staged documentation file.
///
/// `today` is the reference date for the staleness check. A failing staged
/// file query counts as nothing staged.
#[must_use]
pub fn validate_metadata(
    source: &dyn StagedFiles,
    config: MetadataConfig,
    today: NaiveDate,
) -> MetadataReport {
    MetadataValidator::new(config, today).run(source)
}

/// Check every link under the configured documentation directories.
///
/// Broken file targets are errors; anchor problems and unreadable files are
/// warnings. Never fails: all problems end up in the report.
#[must_use]
pub fn validate_links(config: LinkConfig) -> LinkReport {
    LinkValidator::new(config).run()
}
