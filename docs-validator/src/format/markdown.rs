//! Markdown heading and link extraction.
//!
//! Extraction is purely regex-based: no code-block tracking, so headings and
//! links inside fenced blocks are picked up like any other line.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// ATX heading: one or more `#`, whitespace, then the heading text.
static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?m)^#+\s+(.+)$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid heading regex: {err}"),
    }
});

/// Inline link `[text](target)`; the target is capture group 1.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\[.*?\]\((.*?)\)") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid link regex: {err}"),
    }
});

/// Everything that may not appear in an anchor.
static NON_ANCHOR_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"[^\w\-]") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid anchor regex: {err}"),
    }
});

/// Set of anchors defined by one document.
pub type AnchorSet = HashSet<String>;

/// Convert heading text to its anchor.
///
/// Lower-cases, maps spaces to `-` and `&` to `and`, then drops every
/// character that is neither a word character nor `-`.
#[must_use]
pub fn heading_anchor(text: &str) -> String {
    let anchor = text.to_lowercase().replace(' ', "-").replace('&', "and");
    NON_ANCHOR_CHARS.replace_all(&anchor, "").into_owned()
}

/// Collect the anchors of every ATX heading in `content`.
#[must_use]
pub fn extract_anchors(content: &str) -> AnchorSet {
    HEADING_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|text| heading_anchor(text.as_str()))
        .collect()
}

/// Collect the raw target of every inline link in `content`, in order.
#[must_use]
pub fn extract_links(content: &str) -> Vec<String> {
    LINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|target| target.as_str().to_owned())
        .collect()
}
