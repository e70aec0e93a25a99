//! Corpus entities.
//!
//! An [`Entity`] is one topic of the corpus: an anatomical region, a
//! condition, or a concept/topic. The kind-specific fields live in the
//! [`EntityDetails`] tagged union; everything the lookup layer needs in a
//! kind-independent way is exposed through [`Entity::text_fields`] and
//! [`Entity::list_fields`].

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::level::{Level, LevelContent};
use crate::reference::{CrossReference, EntityStub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Region,
    Condition,
    Topic,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Region => "region",
            EntityKind::Condition => "condition",
            EntityKind::Topic => "topic",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Editorial status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Review,
    Published,
}

/// Informational lifecycle fields. The core never acts on these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub version: String,
    pub status: ContentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub source: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub kind: String,
    pub path: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Anatomical region fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDetails {
    pub location: String,
    pub function: String,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub procedures: Vec<String>,
}

/// Condition fields (genetic or acquired).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDetails {
    #[serde(default)]
    pub inheritance: Option<String>,
    #[serde(default)]
    pub genetic_basis: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub affected_regions: Vec<String>,
    #[serde(default)]
    pub genes: Vec<String>,
}

/// Concept/topic fields (pharmacogenomics, general concepts).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDetails {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub drugs: Vec<String>,
    #[serde(default)]
    pub genes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityDetails {
    Region(RegionDetails),
    Condition(ConditionDetails),
    Topic(TopicDetails),
}

impl EntityDetails {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityDetails::Region(_) => EntityKind::Region,
            EntityDetails::Condition(_) => EntityKind::Condition,
            EntityDetails::Topic(_) => EntityKind::Topic,
        }
    }

    /// Free-text descriptive fields (location, function, description, ...).
    pub fn text_fields(&self) -> Vec<&str> {
        match self {
            EntityDetails::Region(region) => vec![&region.location, &region.function],
            EntityDetails::Condition(condition) => condition
                .inheritance
                .iter()
                .chain(condition.genetic_basis.iter())
                .map(String::as_str)
                .collect(),
            EntityDetails::Topic(topic) => topic.description.iter().map(String::as_str).collect(),
        }
    }

    /// List-valued fields (conditions, symptoms, procedures, genes, ...).
    pub fn list_fields(&self) -> Vec<&str> {
        let lists: Vec<&Vec<String>> = match self {
            EntityDetails::Region(region) => {
                vec![&region.conditions, &region.symptoms, &region.procedures]
            }
            EntityDetails::Condition(condition) => {
                vec![
                    &condition.symptoms,
                    &condition.affected_regions,
                    &condition.genes,
                ]
            }
            EntityDetails::Topic(topic) => vec![&topic.keywords, &topic.drugs, &topic.genes],
        };
        lists
            .into_iter()
            .flat_map(|list| list.iter().map(String::as_str))
            .collect()
    }
}

/// One content unit of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub category: Category,
    pub levels: BTreeMap<Level, LevelContent>,
    #[serde(default)]
    pub cross_references: Vec<CrossReference>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    pub lifecycle: Lifecycle,
    pub details: EntityDetails,
    /// True when produced by the fallback synthesizer rather than curated.
    #[serde(default)]
    pub synthesized: bool,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        self.details.kind()
    }

    pub fn level(&self, level: Level) -> Option<&LevelContent> {
        self.levels.get(&level)
    }

    /// Levels present on this entity, simplest first.
    pub fn available_levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.levels.keys().copied()
    }

    pub fn stub(&self) -> EntityStub {
        EntityStub {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category,
        }
    }

    pub fn text_fields(&self) -> Vec<&str> {
        self.details.text_fields()
    }

    pub fn list_fields(&self) -> Vec<&str> {
        self.details.list_fields()
    }

    /// Every field free-text search looks at: id, names, descriptive text
    /// and list values.
    pub fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.name.as_str()];
        fields.extend(self.alternate_names.iter().map(String::as_str));
        fields.extend(self.text_fields());
        fields.extend(self.list_fields());
        fields
    }
}
