use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("level {0} is outside 1..=5")]
    InvalidLevel(u8),
    #[error("unknown category tag: {0}")]
    InvalidCategory(String),
}

/// An existing entity has no level content to serve.
///
/// This indicates an authoring bug in the corpus. Missing entities are
/// synthesized; missing levels on a curated entity are not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelResolutionError {
    #[error("entity '{id}' has no level content")]
    NoLevels { id: String },
}
