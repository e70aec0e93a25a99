use serde::Serialize;

use soma_corpus::ContentSource;
use soma_model::{Entity, EntityStub, Relationship};

/// A cross reference after a one-hop lookup of its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolvedReference {
    Resolved {
        stub: EntityStub,
        relationship: Relationship,
        label: String,
    },
    /// Dangling target; show as "no further detail available".
    Unresolved {
        target_id: String,
        relationship: Relationship,
        label: String,
    },
}

impl ResolvedReference {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolvedReference::Resolved { .. })
    }

    pub fn label(&self) -> &str {
        match self {
            ResolvedReference::Resolved { label, .. }
            | ResolvedReference::Unresolved { label, .. } => label,
        }
    }
}

/// Looks up each cross reference target of `entity`, in declaration order.
///
/// Targets are not followed any further.
pub fn resolve_cross_references<S>(source: &S, entity: &Entity) -> Vec<ResolvedReference>
where
    S: ContentSource + ?Sized,
{
    entity
        .cross_references
        .iter()
        .map(|reference| match source.get(&reference.target_id) {
            Ok(target) => ResolvedReference::Resolved {
                stub: target.stub(),
                relationship: reference.relationship,
                label: reference.label.clone(),
            },
            Err(_) => ResolvedReference::Unresolved {
                target_id: reference.target_id.clone(),
                relationship: reference.relationship,
                label: reference.label.clone(),
            },
        })
        .collect()
}
