//! On-disk record format and its validation into model entities.
//!
//! Records keep the category as a string and the levels as a list so that
//! an unknown tag or a repeated level number can be reported against the
//! entity id instead of surfacing as an anonymous deserialization error.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use soma_model::{
    Category, Citation, CrossReference, Entity, EntityDetails, KeyTerm, Level, LevelContent,
    Lifecycle, MediaRef, ModelError,
};

use crate::error::RegistryLoadError;

#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub levels: Vec<LevelRecord>,
    #[serde(default)]
    pub cross_references: Vec<CrossReference>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    pub lifecycle: Lifecycle,
    pub details: EntityDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelRecord {
    pub level: u8,
    pub summary: String,
    pub explanation: String,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default)]
    pub analogies: Vec<String>,
    #[serde(default)]
    pub clinical_notes: Option<String>,
}

impl EntityRecord {
    pub fn into_entity(self) -> Result<Entity, RegistryLoadError> {
        let category: Category =
            self.category
                .parse()
                .map_err(|error: ModelError| RegistryLoadError::InvalidCategory {
                    id: self.id.clone(),
                    message: error.to_string(),
                })?;

        let mut levels = BTreeMap::new();
        for record in self.levels {
            let number = record.level;
            let level = Level::new(number).map_err(|_| RegistryLoadError::InvalidLevel {
                id: self.id.clone(),
                level: number,
            })?;
            let content = LevelContent {
                level,
                summary: record.summary,
                explanation: record.explanation,
                key_terms: record.key_terms,
                analogies: record.analogies,
                clinical_notes: record.clinical_notes,
            };
            if levels.insert(level, content).is_some() {
                return Err(RegistryLoadError::DuplicateLevel {
                    id: self.id,
                    level: number,
                });
            }
        }

        Ok(Entity {
            id: self.id,
            name: self.name,
            alternate_names: self.alternate_names,
            category,
            levels,
            cross_references: self.cross_references,
            media: self.media,
            citations: self.citations,
            lifecycle: self.lifecycle,
            details: self.details,
            synthesized: false,
        })
    }
}

/// Parses one JSON collection file into entities, in file order.
pub fn parse_collection(file: &str, contents: &str) -> Result<Vec<Entity>, RegistryLoadError> {
    let records: Vec<EntityRecord> =
        serde_json::from_str(contents).map_err(|source| RegistryLoadError::Parse {
            file: file.to_string(),
            source,
        })?;
    records.into_iter().map(EntityRecord::into_entity).collect()
}

/// Parses the alias table (`{ "alias": "entity-id", ... }`).
pub fn parse_aliases(
    file: &str,
    contents: &str,
) -> Result<HashMap<String, String>, RegistryLoadError> {
    serde_json::from_str(contents).map_err(|source| RegistryLoadError::Parse {
        file: file.to_string(),
        source,
    })
}
