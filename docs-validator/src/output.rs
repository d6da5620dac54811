//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters. Color/terminal formatting is
//! intentionally excluded.

use std::io::Write;

use serde::Serialize;

use crate::report::{LinkReport, MetadataOutcome, MetadataReport};

/// Format any report as pretty JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<T: Serialize>(report: &T, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `MetadataReport` as human-readable plain text to a writer.
///
/// Prints nothing when staged files contained no documentation.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_metadata_human(report: &MetadataReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    match report.outcome {
        MetadataOutcome::NothingStaged => {
            writeln!(writer, "No staged files to validate")?;
            return Ok(());
        }
        MetadataOutcome::NoDocumentation => return Ok(()),
        MetadataOutcome::Checked => {}
    }

    writeln!(writer, "Validating documentation metadata...")?;
    writeln!(
        writer,
        "Checking {} documentation file(s)",
        report.checked_files
    )?;
    writeln!(writer)?;

    if !report.errors.is_empty() {
        writeln!(writer, "\u{2717} METADATA VALIDATION FAILED")?;
        writeln!(writer)?;
        writeln!(writer, "Errors:")?;
        for error in &report.errors {
            writeln!(writer, "  {error}")?;
        }
        writeln!(writer)?;
        return Ok(());
    }

    if !report.warnings.is_empty() {
        writeln!(writer, "Warnings (non-blocking):")?;
        for warning in &report.warnings {
            writeln!(writer, "  {warning}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "\u{2713} All documentation metadata is valid!")?;
    writeln!(writer)?;
    Ok(())
}

/// Format a `LinkReport` as human-readable plain text to a writer.
///
/// Only the first `warning_limit` warnings are listed, followed by a count
/// of the remainder.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_links_human(
    report: &LinkReport,
    warning_limit: usize,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let dirs: Vec<String> = report
        .scanned_dirs
        .iter()
        .map(|d| d.display().to_string())
        .collect();

    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(70))?;
    writeln!(writer, "DOCUMENTATION LINK VALIDATION REPORT")?;
    writeln!(writer, "{}", "=".repeat(70))?;
    writeln!(writer)?;
    writeln!(writer, "Scanned directories: {}", dirs.join(", "))?;
    writeln!(writer, "Files scanned: {}", report.scanned_files)?;
    writeln!(writer, "Total links found: {}", report.links_found)?;
    writeln!(writer, "Files with anchors: {}", report.files_with_anchors)?;

    if !report.errors.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "\u{2717} ERRORS ({}):", report.errors.len())?;
        for error in &report.errors {
            writeln!(writer, "   {error}")?;
        }
    }

    if !report.warnings.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "WARNINGS ({}):", report.warnings.len())?;
        for warning in report.warnings.iter().take(warning_limit) {
            writeln!(writer, "   {warning}")?;
        }
        if report.warnings.len() > warning_limit {
            writeln!(
                writer,
                "   ... and {} more",
                report.warnings.len() - warning_limit
            )?;
        }
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "\u{2713} All documentation links are valid!")?;
    }

    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(70))?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Finding;
    use std::path::{Path, PathBuf};

    fn link_report(warnings: usize) -> LinkReport {
        LinkReport {
            scanned_dirs: vec![PathBuf::from("specs"), PathBuf::from("docs")],
            scanned_files: 3,
            links_found: 7,
            files_with_anchors: 2,
            errors: vec![],
            warnings: (0..warnings)
                .map(|i| Finding::warning(Path::new("docs/a.md"), format!("Anchor '#w{i}' might not exist")))
                .collect(),
        }
    }

    fn render_links(report: &LinkReport) -> String {
        let mut buf = Vec::new();
        write_links_human(report, 10, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_links_success_output() {
        let output = render_links(&link_report(0));
        assert!(output.contains("Scanned directories: specs, docs"));
        assert!(output.contains("Total links found: 7"));
        assert!(output.contains("Files with anchors: 2"));
        assert!(output.contains("All documentation links are valid!"));
        assert!(!output.contains("WARNINGS"));
    }

    #[test]
    fn test_links_warnings_truncated_in_order() {
        let output = render_links(&link_report(13));
        assert!(output.contains("WARNINGS (13):"));
        assert!(output.contains("'#w0'"));
        assert!(output.contains("'#w9'"));
        assert!(!output.contains("'#w10'"));
        assert!(output.contains("... and 3 more"));
        assert!(output.find("'#w0'") < output.find("'#w9'"));
    }

    #[test]
    fn test_links_exactly_limit_has_no_remainder_line() {
        let output = render_links(&link_report(10));
        assert!(!output.contains("more"));
    }

    #[test]
    fn test_metadata_nothing_staged() {
        let report = MetadataReport {
            outcome: MetadataOutcome::NothingStaged,
            staged_files: 0,
            checked_files: 0,
            errors: vec![],
            warnings: vec![],
        };
        let mut buf = Vec::new();
        write_metadata_human(&report, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No staged files to validate\n");
    }

    #[test]
    fn test_metadata_failure_lists_errors() {
        let report = MetadataReport {
            outcome: MetadataOutcome::Checked,
            staged_files: 1,
            checked_files: 1,
            errors: vec![Finding::error(
                Path::new("docs/a.md"),
                "Missing metadata: Owner",
            )],
            warnings: vec![],
        };
        let mut buf = Vec::new();
        write_metadata_human(&report, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("METADATA VALIDATION FAILED"));
        assert!(output.contains("  docs/a.md: Missing metadata: Owner"));
        assert!(!output.contains("is valid"));
    }

    #[test]
    fn test_json_output_contract() {
        let mut buf = Vec::new();
        write_json(&link_report(1), &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["links_found"], 7);
        assert_eq!(json["warnings"][0]["severity"], "warning");
        assert_eq!(json["warnings"][0]["file"], "docs/a.md");
    }
}
