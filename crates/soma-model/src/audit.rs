use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// An authoring problem found while auditing the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditIssue {
    /// Entity the issue was found on.
    pub entity_id: String,
    /// Short machine-readable check name (e.g. "missing-level").
    pub check: String,
    /// Human-readable message describing the issue.
    pub message: String,
    pub severity: IssueSeverity,
    /// Level the issue concerns, if any.
    pub level: Option<u8>,
}

/// Collected audit issues for a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn push(&mut self, issue: AuditIssue) {
        self.issues.push(issue);
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

    /// Issues recorded against one entity.
    pub fn for_entity<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a AuditIssue> + 'a {
        self.issues.iter().filter(move |issue| issue.entity_id == id)
    }
}
