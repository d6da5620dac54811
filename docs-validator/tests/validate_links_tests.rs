#![allow(clippy::unwrap_used)]
//! Integration tests for `docs_validator::validate_links`.

use std::fs;
use std::path::Path;

use docs_validator::{LinkConfig, validate_links};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn config(tmp: &TempDir) -> LinkConfig {
    LinkConfig::new(tmp.path().to_path_buf())
}

#[test]
fn test_missing_anchor_in_existing_file_is_single_warning() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "docs/setup.md", "# Setup\n\n## Configure\n");
    write(
        tmp.path(),
        "docs/guide.md",
        "# Guide\n\n[See setup](./setup.md#install)\n",
    );

    let report = validate_links(config(&tmp));
    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert_eq!(report.warnings.len(), 1, "{:?}", report.warnings);
    let warning = report.warnings[0].to_string();
    assert!(warning.contains("#install"), "got: {warning}");
    assert!(warning.starts_with("docs/guide.md: "), "got: {warning}");
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_broken_file_link_is_error() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "specs/a.md", "[gone](../missing/b.md)\n");

    let report = validate_links(config(&tmp));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].to_string(),
        "specs/a.md: File not found: ../missing/b.md"
    );
    assert!(!report.ok());
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_existing_file_without_anchor_is_clean() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "docs/a.md", "[b](b.md) [img](../assets/logo.png)\n");
    write(tmp.path(), "docs/b.md", "no headings here\n");
    write(tmp.path(), "assets/logo.png", "png");

    let report = validate_links(config(&tmp));
    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(report.links_found, 2);
    assert_eq!(report.scanned_files, 2);
}

#[test]
fn test_external_links_are_not_checked() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "docs/a.md",
        "[x](https://example.invalid/nowhere) [y](http://localhost:1/#frag)\n",
    );

    let report = validate_links(config(&tmp));
    assert!(report.ok());
    assert!(report.warnings.is_empty());
    assert_eq!(report.links_found, 2);
}

#[test]
fn test_same_file_anchor() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "planning/roadmap.md",
        "# Roadmap\n\n## Getting Started & FAQ\n\n[faq](#getting-started-and-faq) [nope](#later)\n",
    );

    let report = validate_links(config(&tmp));
    assert!(report.errors.is_empty());
    assert_eq!(report.warnings.len(), 1, "{:?}", report.warnings);
    assert_eq!(
        report.warnings[0].to_string(),
        "planning/roadmap.md: Anchor '#later' might not exist"
    );
}

#[test]
fn test_cross_file_anchor_found() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "docs/api/auth.md", "# Auth\n## Token Refresh\n");
    write(
        tmp.path(),
        "specs/flows.md",
        "[refresh](../docs/api/auth.md#token-refresh)\n",
    );

    let report = validate_links(config(&tmp));
    assert!(report.ok());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(report.files_with_anchors, 1);
}

#[test]
fn test_only_docs_directories_are_scanned() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "notes/a.md", "[gone](missing.md)\n");
    write(tmp.path(), "README.md", "[gone](missing.md)\n");

    let report = validate_links(config(&tmp));
    assert!(report.ok());
    assert_eq!(report.links_found, 0);
    assert_eq!(report.scanned_files, 0);
}

#[test]
fn test_unreadable_file_is_warning_not_error() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("docs")).unwrap();
    fs::write(tmp.path().join("docs/bin.md"), [0xFF, 0xFE, 0x80]).unwrap();
    write(tmp.path(), "docs/ok.md", "[bin](bin.md)\n");

    let report = validate_links(config(&tmp));
    assert!(report.ok(), "{:?}", report.errors);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("Could not read file"));
    assert_eq!(report.scanned_files, 1);
}

#[test]
fn test_exclude_glob_skips_file() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "docs/draft.md", "[gone](missing.md)\n");
    write(tmp.path(), "docs/final.md", "# Final\n");

    let mut cfg = config(&tmp);
    cfg.exclude = vec!["draft.md".to_owned()];
    let report = validate_links(cfg);
    assert!(report.ok());
    assert_eq!(report.scanned_files, 1);
}

#[test]
fn test_exclude_directory_glob_skips_subtree() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "docs/archive/old.md", "[gone](missing.md)\n");
    write(tmp.path(), "docs/index.md", "# Index\n");

    let mut cfg = config(&tmp);
    cfg.exclude = vec!["docs/archive/*".to_owned()];
    let report = validate_links(cfg);
    assert!(report.ok(), "{:?}", report.errors);
    assert_eq!(report.scanned_files, 1);
}

#[test]
fn test_warnings_keep_discovery_order_within_file() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "docs/a.md",
        "[1](#zeta) [2](#alpha) [3](#mid)\n",
    );

    let report = validate_links(config(&tmp));
    let anchors: Vec<String> = report
        .warnings
        .iter()
        .map(|w| w.message.clone())
        .collect();
    assert_eq!(
        anchors,
        vec![
            "Anchor '#zeta' might not exist",
            "Anchor '#alpha' might not exist",
            "Anchor '#mid' might not exist",
        ]
    );
}

#[test]
fn test_human_report_for_run() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "docs/a.md", "[gone](missing.md)\n");

    let report = validate_links(config(&tmp));
    let mut buf = Vec::new();
    docs_validator::output::write_links_human(&report, 10, &mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();
    assert!(output.contains("DOCUMENTATION LINK VALIDATION REPORT"));
    assert!(output.contains("ERRORS (1):"));
    assert!(output.contains("docs/a.md: File not found: missing.md"));
    assert!(!output.contains("All documentation links are valid"));
}
