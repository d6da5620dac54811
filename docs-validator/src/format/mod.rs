//! Text extractors for markdown documents.
//!
//! - `markdown`: heading anchors and inline links
//! - `metadata`: bold-labeled metadata header fields

pub mod markdown;
pub mod metadata;
