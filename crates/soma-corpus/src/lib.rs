#![deny(unsafe_code)]

//! Curated corpus loading, indexing and lookup.
//!
//! The corpus ships embedded in the binary (see [`embedded`]) together with
//! a manifest pinning every file's SHA-256. [`ContentRegistry::load`]
//! verifies the manifest, validates each record into a
//! [`soma_model::Entity`], and builds the lookup indices.

pub mod config;
pub mod doctor;
pub mod embedded;
pub mod error;
pub mod hash;
pub mod index;
pub mod manifest;
pub mod record;
pub mod registry;
pub mod source;

pub use crate::config::{CORPUS_ENV_VAR, CorpusConfig, CorpusSource};
pub use crate::doctor::{CorpusCounts, CorpusReport};
pub use crate::error::{LookupError, RegistryLoadError};
pub use crate::manifest::{Manifest, ManifestFile, Pins};
pub use crate::registry::ContentRegistry;
pub use crate::source::ContentSource;
