//! Embedded corpus data.
//!
//! The curated corpus ships inside the binary via `include_str!()`, so the
//! default configuration needs no file I/O. A directory with the same layout
//! can replace it at runtime (see [`crate::config`]).

/// Corpus manifest with pins and per-file digests.
pub const MANIFEST: &str = include_str!("../data/manifest.toml");

/// Anatomical regions.
pub const REGIONS: &str = include_str!("../data/regions.json");

/// Genetic and acquired conditions.
pub const CONDITIONS: &str = include_str!("../data/conditions.json");

/// Concepts and pharmacogenomic topics.
pub const TOPICS: &str = include_str!("../data/topics.json");

/// Alternate identifier table (menu id -> entity id).
pub const ALIASES: &str = include_str!("../data/aliases.json");

/// Embedded contents for a manifest path.
pub fn file(path: &str) -> Option<&'static str> {
    match path {
        "manifest.toml" => Some(MANIFEST),
        "regions.json" => Some(REGIONS),
        "conditions.json" => Some(CONDITIONS),
        "topics.json" => Some(TOPICS),
        "aliases.json" => Some(ALIASES),
        _ => None,
    }
}
