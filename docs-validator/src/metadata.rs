//! Metadata header validation for staged documentation files.

use std::path::{Component, Path};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::MetadataConfig;
use crate::error::Finding;
use crate::format::metadata::{MetadataField, extract_metadata};
use crate::report::{MetadataOutcome, MetadataReport};
use crate::strategy::fs::read_file_bounded;
use crate::strategy::staged::StagedFiles;

fn segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect()
}

/// Whether `path` is a documentation file that must carry metadata.
///
/// Requires a `.md` extension, a path segment (or run of segments) naming a
/// documentation directory, and no excluded file name or directory.
#[must_use]
pub fn should_check_file(path: &Path, config: &MetadataConfig) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some("md") {
        return false;
    }

    let parts = segments(path);
    let in_docs_dir = config.docs_dirs.iter().any(|dir| {
        let wanted: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
        !wanted.is_empty() && parts.windows(wanted.len()).any(|w| w == wanted.as_slice())
    });
    if !in_docs_dir {
        return false;
    }

    let excluded_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| config.excluded_file_names.iter().any(|e| e == name));
    let excluded_dir = parts
        .iter()
        .any(|part| config.excluded_dirs.iter().any(|e| e == part));
    !excluded_name && !excluded_dir
}

/// Checks staged documentation files for the required metadata header.
///
/// Holds the error and warning accumulators for a single run.
#[derive(Debug)]
pub struct MetadataValidator {
    config: MetadataConfig,
    today: NaiveDate,
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl MetadataValidator {
    /// Create a validator; `today` is the reference date for staleness.
    #[must_use]
    pub fn new(config: MetadataConfig, today: NaiveDate) -> Self {
        Self {
            config,
            today,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Validate a single file, given relative to `config.repo_root`.
    ///
    /// Returns `false` if an error was recorded for the file.
    pub fn validate_file(&mut self, path: &Path) -> bool {
        let full_path = self.config.repo_root.join(path);
        let content = match read_file_bounded(&full_path, self.config.max_file_size) {
            Ok(content) => content,
            Err(e) => {
                self.errors
                    .push(Finding::error(path, format!("Could not read file: {e}")));
                return false;
            }
        };

        let record = extract_metadata(&content);
        let missing = record.missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.into_iter().map(MetadataField::label).collect();
            self.errors.push(Finding::error(
                path,
                format!("Missing metadata: {}", names.join(", ")),
            ));
            return false;
        }

        if let Some(date) = record.get(MetadataField::LastUpdated) {
            self.check_staleness(path, date);
        }
        if let Some(status) = record.get(MetadataField::Status) {
            self.check_status(path, status);
        }
        true
    }

    fn check_staleness(&mut self, path: &Path, date: &str) {
        // Well-formed but impossible dates (2024-13-45) are ignored.
        let Ok(doc_date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            debug!(file = %path.display(), date, "unparseable Last Updated date");
            return;
        };
        let days_old = self.today.signed_duration_since(doc_date).num_days();
        if days_old > self.config.stale_after_days {
            self.warnings.push(Finding::warning(
                path,
                format!("Last Updated is {days_old} days old. Consider updating."),
            ));
        }
    }

    fn check_status(&mut self, path: &Path, status: &str) {
        if !self
            .config
            .valid_statuses
            .iter()
            .any(|s| status.contains(s.as_str()))
        {
            self.warnings.push(Finding::warning(
                path,
                format!(
                    "Status '{status}' should be one of: {}",
                    self.config.valid_statuses.join(", ")
                ),
            ));
        }
    }

    /// Run validation on the files reported by `source`.
    ///
    /// A failing query is treated as an empty list.
    #[must_use]
    pub fn run(mut self, source: &dyn StagedFiles) -> MetadataReport {
        let staged = source.staged_files().unwrap_or_else(|e| {
            warn!(error = %e, "could not list staged files");
            Vec::new()
        });

        let doc_files: Vec<_> = staged
            .iter()
            .filter(|path| should_check_file(path, &self.config))
            .collect();

        let outcome = if staged.is_empty() {
            MetadataOutcome::NothingStaged
        } else if doc_files.is_empty() {
            MetadataOutcome::NoDocumentation
        } else {
            MetadataOutcome::Checked
        };

        for path in &doc_files {
            debug!(file = %path.display(), "checking metadata");
            self.validate_file(path);
        }

        info!(
            staged = staged.len(),
            checked = doc_files.len(),
            errors = self.errors.len(),
            warnings = self.warnings.len(),
            "metadata validation finished"
        );

        MetadataReport {
            outcome,
            staged_files: staged.len(),
            checked_files: doc_files.len(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}
