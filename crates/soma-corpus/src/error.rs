#![deny(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

/// Fatal problem with the corpus found while building the registry.
///
/// The process should not start with a corrupt registry, so every variant
/// names the offending entity id or file.
#[derive(Debug, Error)]
pub enum RegistryLoadError {
    #[error("duplicate entity id: {id}")]
    DuplicateId { id: String },

    #[error("entity '{id}' has invalid category: {message}")]
    InvalidCategory { id: String, message: String },

    #[error("entity '{id}' has invalid level {level}")]
    InvalidLevel { id: String, level: u8 },

    #[error("entity '{id}' declares level {level} more than once")]
    DuplicateLevel { id: String, level: u8 },

    #[error("alias '{alias}' points to unknown entity '{target}'")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("failed to parse corpus file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {message}")]
    Manifest { message: String },

    #[error("missing file listed in manifest: {path}")]
    MissingFile { path: PathBuf },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

impl RegistryLoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
        }
    }
}

/// Exact-id lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no entity with id '{id}'")]
    NotFound { id: String },
}
