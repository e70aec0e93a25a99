#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::RegistryLoadError;
use crate::hash::is_sha256_hex;

pub const MANIFEST_FILE: &str = "manifest.toml";
pub const MANIFEST_SCHEMA: &str = "soma.corpus-manifest";
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Roles every corpus manifest must declare.
pub const REQUIRED_ROLES: &[&str] = &["regions", "conditions", "topics", "aliases"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub notes: Option<ManifestNotes>,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestNotes {
    pub summary: Option<String>,
}

/// Corpus release identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pins {
    pub corpus: String,
    pub content_schema: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub sha256: String,
    pub kind: String,
    pub role: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Manifest {
    pub fn parse(contents: &str) -> Result<Self, RegistryLoadError> {
        toml::from_str(contents)
            .map_err(|e| RegistryLoadError::manifest(format!("{MANIFEST_FILE}: {e}")))
    }

    /// File declared for a role.
    pub fn file_for_role(&self, role: &str) -> Result<&ManifestFile, RegistryLoadError> {
        self.files
            .iter()
            .find(|file| file.role == role)
            .ok_or_else(|| RegistryLoadError::manifest(format!("missing required role: {role}")))
    }

    /// Checks header, roles, digests and paths.
    pub fn validate(&self) -> Result<(), RegistryLoadError> {
        if self.manifest.schema != MANIFEST_SCHEMA {
            return Err(RegistryLoadError::manifest(format!(
                "unsupported schema: {}",
                self.manifest.schema
            )));
        }
        if self.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
            return Err(RegistryLoadError::manifest(format!(
                "unsupported schema_version: {}",
                self.manifest.schema_version
            )));
        }

        let mut roles: BTreeSet<&str> = BTreeSet::new();
        for file in &self.files {
            if !roles.insert(file.role.as_str()) {
                return Err(RegistryLoadError::manifest(format!(
                    "duplicate role: {}",
                    file.role
                )));
            }
            if file.kind != "json" {
                return Err(RegistryLoadError::manifest(format!(
                    "unsupported kind '{}' for {}",
                    file.kind, file.path
                )));
            }
            if !is_sha256_hex(&file.sha256) {
                return Err(RegistryLoadError::manifest(format!(
                    "invalid sha256 for {}",
                    file.path
                )));
            }
            validate_path(&file.path)?;
        }

        for role in REQUIRED_ROLES {
            if !roles.contains(role) {
                return Err(RegistryLoadError::manifest(format!(
                    "missing required role: {role}"
                )));
            }
        }
        Ok(())
    }
}

fn validate_path(path: &str) -> Result<(), RegistryLoadError> {
    let candidate = Path::new(path);
    let escapes = candidate
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if path.is_empty() || escapes {
        return Err(RegistryLoadError::manifest(format!(
            "path must be relative to the corpus root: {path}"
        )));
    }
    Ok(())
}
