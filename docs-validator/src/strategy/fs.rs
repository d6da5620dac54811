//! Filesystem source for the link validator.
//!
//! Walks the documentation directories and reads files with bounded reads.
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Maximum directory depth is enforced
//! - Walk order is the order the filesystem yields entries; nothing is sorted

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::LinkConfig;
use crate::error::{Finding, ReadError};

/// Check if a path matches any of the exclude patterns.
///
/// Patterns are matched against the path relative to `root` and against the
/// bare file name.
fn matches_exclude(path: &Path, root: &Path, exclude_patterns: &[Pattern]) -> bool {
    let relative = display_path(path, root);
    let path_str = relative.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

/// Path shown in findings: relative to `root` when possible.
#[must_use]
pub fn display_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

/// Find all markdown files under the configured documentation directories.
///
/// Returns `(files, warnings)`:
/// - `files`: markdown files in walk order, directory by directory.
/// - `warnings`: walk errors (permission denied, loops) and invalid exclude
///   patterns. They are reported, never fatal.
#[must_use]
pub fn find_markdown_files(config: &LinkConfig) -> (Vec<PathBuf>, Vec<Finding>) {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    let mut exclude_patterns = Vec::with_capacity(config.exclude.len());
    for pat_str in &config.exclude {
        match Pattern::new(pat_str) {
            Ok(pat) => exclude_patterns.push(pat),
            Err(e) => warnings.push(Finding::warning(
                Path::new(pat_str),
                format!("Invalid exclude glob pattern: {e}"),
            )),
        }
    }

    for dir in &config.docs_dirs {
        let docs_dir = config.root.join(dir);
        if !docs_dir.is_dir() {
            debug!(dir = %docs_dir.display(), "documentation directory not present, skipping");
            continue;
        }

        for entry_result in WalkDir::new(&docs_dir)
            .follow_links(config.follow_links)
            .max_depth(config.max_depth)
        {
            let entry = match entry_result {
                Ok(e) => e,
                Err(walk_err) => {
                    let path = walk_err
                        .path()
                        .map_or_else(|| docs_dir.clone(), Path::to_path_buf);
                    warnings.push(Finding::warning(
                        &display_path(&path, &config.root),
                        format!("Directory traversal error: {walk_err}"),
                    ));
                    continue;
                }
            };

            let file_path = entry.path();
            if !file_path.is_file() || !is_markdown(file_path) {
                continue;
            }
            if matches_exclude(file_path, &config.root, &exclude_patterns) {
                debug!(file = %file_path.display(), "excluded");
                continue;
            }
            files.push(file_path.to_path_buf());
        }
    }

    (files, warnings)
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// Reads at most `max_file_size + 1` bytes so an oversized file is detected
/// without loading it whole.
///
/// # Errors
///
/// Returns a [`ReadError`] if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, ReadError> {
    let file = std::fs::File::open(path)?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)?;

    if buffer.len() as u64 > max_file_size {
        return Err(ReadError::TooLarge {
            limit: max_file_size,
        });
    }

    String::from_utf8(buffer).map_err(|_| ReadError::InvalidEncoding)
}
