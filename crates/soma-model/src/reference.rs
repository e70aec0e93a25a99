use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::Category;

/// Kind of link between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Parent => "parent",
            Relationship::Child => "child",
            Relationship::Sibling => "sibling",
            Relationship::Related => "related",
            Relationship::SeeAlso => "see-also",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "parent" => Ok(Relationship::Parent),
            "child" => Ok(Relationship::Child),
            "sibling" => Ok(Relationship::Sibling),
            "related" => Ok(Relationship::Related),
            "see-also" => Ok(Relationship::SeeAlso),
            _ => Err(format!("Unknown relationship: {}", s)),
        }
    }
}

/// A directed, labeled pointer to another entity.
///
/// The target may not exist in the corpus; consumers must treat a dangling
/// target as "no further detail available", not as corruption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    pub target_id: String,
    pub relationship: Relationship,
    pub label: String,
}

/// Lightweight view of an entity used when following a cross reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStub {
    pub id: String,
    pub name: String,
    pub category: Category,
}
