//! Command-line front end for `docs-validator`.
//!
//! Backs two binaries: `validate-doc-metadata` and `validate-doc-links`.

pub mod cli;
pub mod logging;

pub use cli::{
    CommonArgs, LinksArgs, MetadataArgs, OutputFormat, report_metadata, run_links, run_metadata,
};
