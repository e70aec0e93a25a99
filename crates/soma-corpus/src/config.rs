//! Corpus source configuration.

use std::path::PathBuf;

/// Environment variable for overriding the corpus directory.
pub const CORPUS_ENV_VAR: &str = "SOMA_CORPUS_DIR";

/// Where corpus files are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorpusSource {
    /// Compiled-in corpus.
    #[default]
    Embedded,
    /// Directory holding `manifest.toml` and the collection files.
    Directory(PathBuf),
}

/// Configuration for loading the content registry.
///
/// # Example
///
/// ```rust,ignore
/// let config = CorpusConfig::from_env().with_topics(false);
/// let registry = ContentRegistry::load(&config)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    pub source: CorpusSource,
    pub load_regions: bool,
    pub load_conditions: bool,
    pub load_topics: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            source: CorpusSource::Embedded,
            load_regions: true,
            load_conditions: true,
            load_topics: true,
        }
    }
}

impl CorpusConfig {
    /// Embedded corpus unless `SOMA_CORPUS_DIR` is set.
    pub fn from_env() -> Self {
        match std::env::var_os(CORPUS_ENV_VAR) {
            Some(dir) if !dir.is_empty() => Self::default().with_directory(dir),
            _ => Self::default(),
        }
    }

    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source = CorpusSource::Directory(dir.into());
        self
    }

    pub fn with_regions(mut self, enabled: bool) -> Self {
        self.load_regions = enabled;
        self
    }

    pub fn with_conditions(mut self, enabled: bool) -> Self {
        self.load_conditions = enabled;
        self
    }

    pub fn with_topics(mut self, enabled: bool) -> Self {
        self.load_topics = enabled;
        self
    }

    /// True when every collection is enabled.
    pub fn loads_everything(&self) -> bool {
        self.load_regions && self.load_conditions && self.load_topics
    }
}
