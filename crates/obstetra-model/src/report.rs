use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A validation issue found on a single field of a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Field name the issue applies to (e.g. "rut", "glucemia").
    pub field: String,
    /// Severity level.
    pub severity: IssueSeverity,
    /// Human-readable message describing the issue.
    pub message: String,
}

impl FieldIssue {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity: IssueSeverity::Error,
            message: message.into(),
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity: IssueSeverity::Warning,
            message: message.into(),
        }
    }
}

/// Validation report for a single record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordReport {
    /// Record identifier (normalized RUT where available).
    #[serde(rename = "record")]
    pub record_id: String,
    pub issues: Vec<FieldIssue>,
}

impl RecordReport {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            issues: Vec::new(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
