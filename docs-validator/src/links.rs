//! Relative link and anchor validation across a documentation tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LinkConfig;
use crate::error::Finding;
use crate::format::markdown::{AnchorSet, extract_anchors, extract_links};
use crate::report::LinkReport;
use crate::strategy::fs::{display_path, find_markdown_files, read_file_bounded};

/// How a link target is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// `http`-prefixed; never checked.
    External,
    /// `#anchor` within the linking document.
    SameFile { anchor: &'a str },
    /// A path relative to the linking document, optionally with `#anchor`.
    CrossFile {
        path: &'a str,
        anchor: Option<&'a str>,
    },
    /// `[text]()`; nothing to check.
    Empty,
}

impl<'a> LinkTarget<'a> {
    /// Classify a raw link target.
    ///
    /// An empty fragment (`file.md#`) is treated as no anchor.
    #[must_use]
    pub fn classify(url: &'a str) -> Self {
        if url.starts_with("http") {
            return Self::External;
        }
        if let Some(anchor) = url.strip_prefix('#') {
            return Self::SameFile { anchor };
        }
        if url.is_empty() {
            return Self::Empty;
        }
        match url.split_once('#') {
            Some((path, anchor)) => Self::CrossFile {
                path,
                anchor: Some(anchor).filter(|a| !a.is_empty()),
            },
            None => Self::CrossFile {
                path: url,
                anchor: None,
            },
        }
    }
}

/// A link found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// The linking document (canonical path when it could be resolved).
    pub source: PathBuf,
    /// The raw link target.
    pub url: String,
}

/// Heading anchors per document, computed at most once per file.
#[derive(Debug, Default)]
pub struct AnchorCache {
    anchors: HashMap<PathBuf, AnchorSet>,
}

impl AnchorCache {
    /// Anchors of `path`, if already computed.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&AnchorSet> {
        self.anchors.get(path)
    }

    /// Whether `path` has been indexed, even with zero anchors.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.anchors.contains_key(path)
    }

    /// Whether `anchor` is defined in `path`. Unindexed files define nothing.
    #[must_use]
    pub fn has_anchor(&self, path: &Path, anchor: &str) -> bool {
        self.get(path).is_some_and(|set| set.contains(anchor))
    }

    /// Record the anchors of `path`, replacing any earlier set.
    pub fn insert(&mut self, path: PathBuf, anchors: AnchorSet) {
        self.anchors.insert(path, anchors);
    }

    /// Number of indexed files that define at least one anchor.
    #[must_use]
    pub fn files_with_anchors(&self) -> usize {
        self.anchors.values().filter(|set| !set.is_empty()).count()
    }
}

fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Walks the documentation directories and checks every local link.
///
/// Owns the anchor cache and the finding accumulators for one run.
#[derive(Debug)]
pub struct LinkValidator {
    config: LinkConfig,
    root: PathBuf,
    anchors: AnchorCache,
    links: Vec<LinkRecord>,
    scanned_files: usize,
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl LinkValidator {
    /// Create a validator; `config.root` is canonicalized when possible.
    #[must_use]
    pub fn new(config: LinkConfig) -> Self {
        let root = canonical_or_self(&config.root);
        Self {
            config,
            root,
            anchors: AnchorCache::default(),
            links: Vec::new(),
            scanned_files: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn display(&self, path: &Path) -> PathBuf {
        display_path(path, &self.root)
    }

    /// Read every documentation file, index its anchors, and collect its links.
    pub fn extract_links(&mut self) {
        let mut config = self.config.clone();
        config.root.clone_from(&self.root);
        let (files, walk_warnings) = find_markdown_files(&config);
        self.warnings.extend(walk_warnings);

        for file in files {
            let source = canonical_or_self(&file);
            let content = match read_file_bounded(&file, self.config.max_file_size) {
                Ok(content) => content,
                Err(e) => {
                    let shown = self.display(&source);
                    self.warnings
                        .push(Finding::warning(&shown, format!("Could not read file: {e}")));
                    continue;
                }
            };
            self.scanned_files += 1;

            let urls = extract_links(&content);
            debug!(file = %file.display(), links = urls.len(), "scanned");
            self.anchors.insert(source.clone(), extract_anchors(&content));
            self.links.extend(urls.into_iter().map(|url| LinkRecord {
                source: source.clone(),
                url,
            }));
        }
    }

    /// Index `target` on demand if it is a markdown file not seen yet.
    fn ensure_anchors(&mut self, target: &Path) {
        if self.anchors.contains(target)
            || target.extension().and_then(|e| e.to_str()) != Some("md")
        {
            return;
        }
        match read_file_bounded(target, self.config.max_file_size) {
            Ok(content) => {
                debug!(file = %target.display(), "indexed anchors on demand");
                self.anchors.insert(target.to_path_buf(), extract_anchors(&content));
            }
            Err(e) => {
                let shown = self.display(target);
                self.warnings
                    .push(Finding::warning(&shown, format!("Could not read file: {e}")));
            }
        }
    }

    fn validate_link(&mut self, link: &LinkRecord) {
        let shown = self.display(&link.source);
        match LinkTarget::classify(&link.url) {
            LinkTarget::External | LinkTarget::Empty => {}
            LinkTarget::SameFile { anchor } => {
                if !self.anchors.has_anchor(&link.source, anchor) {
                    self.warnings.push(Finding::warning(
                        &shown,
                        format!("Anchor '#{anchor}' might not exist"),
                    ));
                }
            }
            LinkTarget::CrossFile { path, anchor } => {
                let base = link.source.parent().unwrap_or(&self.root);
                let Ok(target) = base.join(path).canonicalize() else {
                    self.errors
                        .push(Finding::error(&shown, format!("File not found: {path}")));
                    return;
                };
                if let Some(anchor) = anchor {
                    self.ensure_anchors(&target);
                    if !self.anchors.has_anchor(&target, anchor) {
                        self.warnings.push(Finding::warning(
                            &shown,
                            format!("Anchor '#{anchor}' not found in {path}"),
                        ));
                    }
                }
            }
        }
    }

    /// Check every extracted link. Returns `true` if no link is broken.
    pub fn validate_links(&mut self) -> bool {
        let links = std::mem::take(&mut self.links);
        for link in &links {
            self.validate_link(link);
        }
        self.links = links;
        self.errors.is_empty()
    }

    /// Extract, validate, and produce the report.
    #[must_use]
    pub fn run(mut self) -> LinkReport {
        self.extract_links();
        self.validate_links();
        info!(
            files = self.scanned_files,
            links = self.links.len(),
            errors = self.errors.len(),
            warnings = self.warnings.len(),
            "link validation finished"
        );
        self.into_report()
    }

    fn into_report(self) -> LinkReport {
        LinkReport {
            scanned_dirs: self.config.docs_dirs.iter().map(PathBuf::from).collect(),
            scanned_files: self.scanned_files,
            links_found: self.links.len(),
            files_with_anchors: self.anchors.files_with_anchors(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}
