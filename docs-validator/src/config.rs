//! Configuration types for documentation validation.
//!
//! Each validator has its own config. Defaults reproduce the fixed behavior of
//! the command-line tools; the CLI only overrides individual fields.

use std::path::{Path, PathBuf};

/// Documentation directories scanned by the link validator.
pub const LINK_DOCS_DIRS: &[&str] = &["specs", "docs", "planning"];

/// Documentation directories whose files require metadata.
pub const METADATA_DOCS_DIRS: &[&str] = &["specs", "docs", "planning", ".github/docs"];

/// Status keywords accepted by the status check.
pub const VALID_STATUSES: &[&str] = &[
    "Complete",
    "In Progress",
    "Planned",
    "Deprecated",
    "Archived",
    "Needs Update",
];

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Options for the metadata validator.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct MetadataConfig {
    /// Directory against which staged paths are read: the repository top level.
    pub repo_root: PathBuf,
    /// Directory names that mark a file as documentation. Entries containing
    /// `/` match a contiguous run of path segments.
    pub docs_dirs: Vec<String>,
    /// File names that never require metadata (index files).
    pub excluded_file_names: Vec<String>,
    /// Directory names whose contents are never checked.
    pub excluded_dirs: Vec<String>,
    /// A `Last Updated` date older than this many days produces a warning.
    pub stale_after_days: i64,
    /// A `Status` value must contain one of these keywords.
    pub valid_statuses: Vec<String>,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            docs_dirs: owned(METADATA_DOCS_DIRS),
            excluded_file_names: owned(&["README.md"]),
            excluded_dirs: owned(&[".git", "node_modules", "__pycache__"]),
            stale_after_days: 180,
            valid_statuses: owned(VALID_STATUSES),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Options for the link validator.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct LinkConfig {
    /// Project root; `docs_dirs` are resolved against it.
    pub root: PathBuf,
    /// Documentation directories (relative to `root`) to walk.
    pub docs_dirs: Vec<String>,
    /// Exclude patterns (glob format), matched against the root-relative path and the file name.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links while walking.
    ///
    /// **Defaults to `false`**: following symlinks can escape the project root.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Number of warnings printed in the human report before truncating.
    pub warning_display_limit: usize,
}

impl LinkConfig {
    /// Create a config rooted at `root` with default options.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }
}

/// Project root for an installed executable: three directories above it.
///
/// For `<root>/target/release/validate-doc-links` this is `<root>`. Returns
/// `None` when the path is too shallow.
#[must_use]
pub fn project_root_from_exe(exe: &Path) -> Option<PathBuf> {
    exe.ancestors().nth(3).map(Path::to_path_buf)
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            docs_dirs: owned(LINK_DOCS_DIRS),
            exclude: Vec::new(),
            follow_links: false,
            max_depth: 64,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            warning_display_limit: 10,
        }
    }
}
