#![deny(unsafe_code)]

//! Corpus doctor: authoring audit plus a serializable summary of what was
//! loaded.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use soma_model::{AuditIssue, AuditReport, Entity, EntityKind, IssueSeverity, Level};

use crate::manifest::{ManifestFile, Pins};
use crate::registry::ContentRegistry;

pub const REPORT_SCHEMA: &str = "soma.corpus-doctor";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Markers left behind by unfinished authoring.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(TODO|FIXME|placeholder)\b").expect("Invalid placeholder regex")
});

#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    pub schema: String,
    pub schema_version: u32,
    pub pins: Option<Pins>,
    pub files: Vec<ManifestFile>,
    pub counts: CorpusCounts,
    pub issues: Vec<AuditIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorpusCounts {
    pub files: usize,
    pub entities: usize,
    pub regions: usize,
    pub conditions: usize,
    pub topics: usize,
    pub aliases: usize,
    pub by_category: BTreeMap<String, usize>,
    pub errors: usize,
    pub warnings: usize,
}

impl CorpusReport {
    pub fn build(registry: &ContentRegistry) -> Self {
        let audit = audit(registry);
        let (pins, files) = match registry.manifest() {
            Some(manifest) => {
                let mut files = manifest.files.clone();
                files.sort_by(|a, b| a.path.cmp(&b.path));
                (Some(manifest.pins.clone()), files)
            }
            None => (None, Vec::new()),
        };
        let count_kind = |kind: EntityKind| {
            registry
                .entities()
                .iter()
                .filter(|entity| entity.kind() == kind)
                .count()
        };

        Self {
            schema: REPORT_SCHEMA.to_string(),
            schema_version: REPORT_SCHEMA_VERSION,
            pins,
            counts: CorpusCounts {
                files: files.len(),
                entities: registry.len(),
                regions: count_kind(EntityKind::Region),
                conditions: count_kind(EntityKind::Condition),
                topics: count_kind(EntityKind::Topic),
                aliases: registry.alias_count(),
                by_category: registry
                    .categories()
                    .into_iter()
                    .map(|(category, count)| (category.as_str().to_string(), count))
                    .collect(),
                errors: audit.error_count(),
                warnings: audit.warning_count(),
            },
            files,
            issues: audit.issues,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.counts.errors > 0
    }
}

/// Audits every entity in registry order.
pub fn audit(registry: &ContentRegistry) -> AuditReport {
    let mut report = AuditReport::default();
    for entity in registry.entities() {
        audit_entity(entity, registry, &mut report);
    }
    report
}

fn audit_entity(entity: &Entity, registry: &ContentRegistry, report: &mut AuditReport) {
    let mut issue = |check: &str, severity: IssueSeverity, level: Option<Level>, message: String| {
        report.push(AuditIssue {
            entity_id: entity.id.clone(),
            check: check.to_string(),
            message,
            severity,
            level: level.map(Level::get),
        });
    };

    if entity.levels.is_empty() {
        issue(
            "no-levels",
            IssueSeverity::Error,
            None,
            "entity has no level content".to_string(),
        );
    } else {
        for level in Level::ALL {
            if entity.level(level).is_none() {
                issue(
                    "missing-level",
                    IssueSeverity::Warning,
                    Some(level),
                    format!("level {level} is missing"),
                );
            }
        }
    }

    if contains_placeholder(&entity.name) {
        issue(
            "placeholder",
            IssueSeverity::Error,
            None,
            format!("name contains placeholder text: {}", entity.name),
        );
    }

    for (&level, content) in &entity.levels {
        if content.summary.trim().is_empty() {
            issue(
                "empty-summary",
                IssueSeverity::Error,
                Some(level),
                format!("level {level}: missing or empty summary"),
            );
        }
        if content.explanation.trim().is_empty() {
            issue(
                "empty-explanation",
                IssueSeverity::Error,
                Some(level),
                format!("level {level}: missing or empty explanation"),
            );
        }
        if content.key_terms.is_empty() {
            issue(
                "no-key-terms",
                IssueSeverity::Warning,
                Some(level),
                format!("level {level}: no key terms"),
            );
        }
        for term in &content.key_terms {
            if term.term.trim().is_empty() || term.definition.trim().is_empty() {
                issue(
                    "empty-key-term",
                    IssueSeverity::Error,
                    Some(level),
                    format!("level {level}: key term '{}' is incomplete", term.term),
                );
            }
        }
        let texts = [content.summary.as_str(), content.explanation.as_str()];
        if texts.into_iter().any(contains_placeholder) {
            issue(
                "placeholder",
                IssueSeverity::Error,
                Some(level),
                format!("level {level}: text contains placeholder markers"),
            );
        }
    }

    for reference in &entity.cross_references {
        if !registry.contains(&reference.target_id) {
            issue(
                "dangling-reference",
                IssueSeverity::Warning,
                None,
                format!(
                    "{} reference to '{}' does not resolve",
                    reference.relationship, reference.target_id
                ),
            );
        }
    }
}

fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_markers_are_whole_words() {
        assert!(contains_placeholder("TODO: write this"));
        assert!(contains_placeholder("a Placeholder summary"));
        assert!(contains_placeholder("fixme later"));
        assert!(!contains_placeholder("Todos los pacientes"));
        assert!(!contains_placeholder("placeholders"));
    }
}
