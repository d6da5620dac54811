//! Argument parsing and the run functions behind both binaries.
//!
//! Run functions write the report to the given writer and return the process
//! exit code; only output failures surface as `Err`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, ValueEnum};
use docs_validator::output::{write_json, write_links_human, write_metadata_human};
use docs_validator::{
    GitStagedFiles, LinkConfig, MetadataConfig, StagedFiles, project_root_from_exe,
    validate_links, validate_metadata,
};
use tracing::debug;

/// Report format on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Flags shared by both binaries.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Increase verbosity (-v INFO, -vv DEBUG); `RUST_LOG` overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Check that staged documentation files carry the required metadata header.
#[derive(Debug, Parser)]
#[command(name = "validate-doc-metadata", version)]
pub struct MetadataArgs {
    /// Repository in which to query staged files (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Check relative links and anchors under specs/, docs/ and planning/.
#[derive(Debug, Parser)]
#[command(name = "validate-doc-links", version)]
pub struct LinksArgs {
    /// Project root (default: three levels above the installed executable)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Skip files matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Root used when `--root` is not given.
fn default_root() -> PathBuf {
    std::env::current_exe()
        .and_then(|exe| exe.canonicalize())
        .ok()
        .and_then(|exe| project_root_from_exe(&exe))
        .filter(|root| !root.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Run metadata validation against an explicit staged-file source.
///
/// Staged paths are read relative to `--repo` (default: current directory).
///
/// # Errors
///
/// Returns an error if writing the report fails.
pub fn report_metadata(
    args: &MetadataArgs,
    source: &dyn StagedFiles,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<i32> {
    let repo_root = args.repo.as_deref().unwrap_or_else(|| Path::new("."));
    report_metadata_in(args, source, repo_root, today, out)
}

fn report_metadata_in(
    args: &MetadataArgs,
    source: &dyn StagedFiles,
    repo_root: &Path,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<i32> {
    let mut config = MetadataConfig::default();
    repo_root.clone_into(&mut config.repo_root);

    let report = validate_metadata(source, config, today);
    match args.common.format {
        OutputFormat::Human => write_metadata_human(&report, out)?,
        OutputFormat::Json => write_json(&report, out)?,
    }
    Ok(report.exit_code())
}

/// Run metadata validation on the files staged in git.
///
/// Staged paths are read relative to the working tree's top level, so `--repo`
/// may point anywhere inside it.
///
/// # Errors
///
/// Returns an error if writing the report fails.
pub fn run_metadata(args: &MetadataArgs, today: NaiveDate, out: &mut dyn Write) -> Result<i32> {
    let repo = args.repo.clone().unwrap_or_else(|| PathBuf::from("."));
    let git = GitStagedFiles::new(&repo);
    let repo_root = git.toplevel().unwrap_or_else(|e| {
        debug!(error = %e, repo = %repo.display(), "could not resolve repository top level");
        repo.clone()
    });
    report_metadata_in(args, &git, &repo_root, today, out)
}

/// Run link validation.
///
/// # Errors
///
/// Returns an error if writing the report fails.
pub fn run_links(args: &LinksArgs, out: &mut dyn Write) -> Result<i32> {
    let root = args.root.clone().unwrap_or_else(default_root);
    debug!(root = %root.display(), "validating documentation links");

    let mut config = LinkConfig::new(root);
    config.exclude.clone_from(&args.exclude);
    let limit = config.warning_display_limit;

    let report = validate_links(config);
    match args.common.format {
        OutputFormat::Human => write_links_human(&report, limit, out)?,
        OutputFormat::Json => write_json(&report, out)?,
    }
    Ok(report.exit_code())
}
