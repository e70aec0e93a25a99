#![deny(unsafe_code)]

pub mod audit;
pub mod category;
pub mod entity;
pub mod error;
pub mod level;
pub mod reference;

pub use audit::{AuditIssue, AuditReport, IssueSeverity};
pub use category::Category;
pub use entity::{
    Citation, ConditionDetails, ContentStatus, Entity, EntityDetails, EntityKind, Lifecycle,
    MediaRef, RegionDetails, TopicDetails,
};
pub use error::{LevelResolutionError, ModelError};
pub use level::{KeyTerm, Level, LevelContent};
pub use reference::{CrossReference, EntityStub, Relationship};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_report_counts() {
        let report = AuditReport {
            issues: vec![
                AuditIssue {
                    entity_id: "heart".to_string(),
                    check: "empty-summary".to_string(),
                    message: "level 2 has an empty summary".to_string(),
                    severity: IssueSeverity::Error,
                    level: Some(2),
                },
                AuditIssue {
                    entity_id: "heart".to_string(),
                    check: "missing-level".to_string(),
                    message: "level 5 is missing".to_string(),
                    severity: IssueSeverity::Warning,
                    level: Some(5),
                },
                AuditIssue {
                    entity_id: "liver".to_string(),
                    check: "dangling-reference".to_string(),
                    message: "cross reference to 'bile-duct' does not resolve".to_string(),
                    severity: IssueSeverity::Warning,
                    level: None,
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
        assert!(report.has_errors());
        assert_eq!(report.for_entity("heart").count(), 2);
    }

    #[test]
    fn relationship_parses_see_also_variants() {
        assert_eq!("see-also".parse::<Relationship>(), Ok(Relationship::SeeAlso));
        assert_eq!("See_Also".parse::<Relationship>(), Ok(Relationship::SeeAlso));
        assert!("cousin".parse::<Relationship>().is_err());
    }
}
