//! Whole-catalog validation of a record source.
//!
//! Fetches every catalog number and reports each record that is missing or
//! fails to parse or validate.

use yj_core::CatalogNumber;

use crate::source::{RecordSource, SourceError};

/// What kind of problem a record has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The source has no record.
    Missing,
    /// The record could not be parsed or is structurally invalid.
    Malformed,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Malformed => write!(f, "malformed"),
        }
    }
}

/// A problem found with one record.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// The affected catalog number.
    pub number: CatalogNumber,
    /// What kind of problem.
    pub kind: IssueKind,
    /// A human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hexagram {:02}: {}: {}",
            self.number.get(),
            self.kind,
            self.message
        )
    }
}

/// Check all 64 records of a source. An empty result means the source is
/// complete and every record is well-formed.
pub fn validate_catalog(source: &dyn RecordSource) -> Vec<ValidationIssue> {
    let issues: Vec<ValidationIssue> = CatalogNumber::all()
        .filter_map(|number| {
            let (kind, message) = match source.fetch(number) {
                Ok(record) => match record.validate() {
                    Ok(()) => return None,
                    Err(reason) => (IssueKind::Malformed, reason.to_string()),
                },
                Err(SourceError::NotFound(detail)) => (IssueKind::Missing, detail),
                Err(SourceError::Malformed(reason)) => (IssueKind::Malformed, reason),
            };
            Some(ValidationIssue {
                number,
                kind,
                message,
            })
        })
        .collect();

    if issues.is_empty() {
        tracing::info!("all 64 hexagram records are valid");
    } else {
        tracing::warn!(count = issues.len(), "hexagram records with issues");
    }
    issues
}
