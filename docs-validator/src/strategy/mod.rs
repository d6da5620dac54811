//! Input sources for the validators.
//!
//! - `fs`: documentation tree walking and bounded reads (link validator)
//! - `staged`: the version-control staged-file query (metadata validator)

pub mod fs;
pub mod staged;
