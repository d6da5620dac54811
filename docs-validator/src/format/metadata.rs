//! Metadata header extraction.
//!
//! Documentation files carry bold-labeled key/value lines near the top:
//!
//! ```text
//! **Last Updated**: 2025-01-31
//! **Status**: In Progress
//! **Owner**: Platform Team
//! **Document Type**: Design
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// A required metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    /// `**Last Updated**`: an ISO `YYYY-MM-DD` date.
    LastUpdated,
    /// `**Status**`: free text, expected to contain a known keyword.
    Status,
    /// `**Owner**`
    Owner,
    /// `**Document Type**`
    DocumentType,
}

impl MetadataField {
    /// All required fields, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::LastUpdated,
        Self::Status,
        Self::Owner,
        Self::DocumentType,
    ];

    /// The bold label as written in documents.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LastUpdated => "Last Updated",
            Self::Status => "Status",
            Self::Owner => "Owner",
            Self::DocumentType => "Document Type",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::LastUpdated => &LAST_UPDATED_PATTERN,
            Self::Status => &STATUS_PATTERN,
            Self::Owner => &OWNER_PATTERN,
            Self::DocumentType => &DOCUMENT_TYPE_PATTERN,
        }
    }
}

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid metadata regex: {err}"),
    }
}

// Value is capture group 1. `Last Updated` only matches an ISO date.
static LAST_UPDATED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\*\*Last Updated\*\*:\s*(\d{4}-\d{2}-\d{2})"));
static STATUS_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*Status\*\*:\s*(.+)"));
static OWNER_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*Owner\*\*:\s*(.+)"));
static DOCUMENT_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\*\*Document Type\*\*:\s*(.+)"));

/// Metadata values found in one document. `None` means the field is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    /// The date string as written; parsed later.
    pub last_updated: Option<String>,
    /// Rest of the `Status` line, trailing whitespace removed.
    pub status: Option<String>,
    /// Rest of the `Owner` line.
    pub owner: Option<String>,
    /// Rest of the `Document Type` line.
    pub document_type: Option<String>,
}

impl MetadataRecord {
    /// Value of `field`, if present.
    #[must_use]
    pub fn get(&self, field: MetadataField) -> Option<&str> {
        match field {
            MetadataField::LastUpdated => self.last_updated.as_deref(),
            MetadataField::Status => self.status.as_deref(),
            MetadataField::Owner => self.owner.as_deref(),
            MetadataField::DocumentType => self.document_type.as_deref(),
        }
    }

    /// Required fields that were not found, in reporting order.
    #[must_use]
    pub fn missing(&self) -> Vec<MetadataField> {
        MetadataField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }
}

/// Extract the first match of every required field from `content`.
#[must_use]
pub fn extract_metadata(content: &str) -> MetadataRecord {
    let find = |field: MetadataField| {
        field
            .pattern()
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|value| value.as_str().trim_end().to_owned())
    };
    MetadataRecord {
        last_updated: find(MetadataField::LastUpdated),
        status: find(MetadataField::Status),
        owner: find(MetadataField::Owner),
        document_type: find(MetadataField::DocumentType),
    }
}
