#![deny(unsafe_code)]

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use soma_model::{Category, Entity};

use crate::config::{CorpusConfig, CorpusSource};
use crate::embedded;
use crate::error::{LookupError, RegistryLoadError};
use crate::hash::sha256_hex;
use crate::index::{PostingIndex, intersect_sorted, normalize_query, tokenize};
use crate::manifest::{MANIFEST_FILE, Manifest, ManifestFile};
use crate::record::{parse_aliases, parse_collection};

/// Immutable, indexed view of the curated corpus.
///
/// Built once at startup and shared read-only afterwards. Every query
/// returns entities in registry insertion order (collection order, then
/// file order).
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    entities: Vec<Arc<Entity>>,
    by_id: HashMap<String, usize>,
    by_category: BTreeMap<Category, Vec<usize>>,
    tokens: PostingIndex,
    related_tags: PostingIndex,
    /// Lower-cased searchable fields per entity, parallel to `entities`.
    search_text: Vec<Vec<String>>,
    aliases: HashMap<String, String>,
    manifest: Option<Manifest>,
}

impl ContentRegistry {
    /// Indexes already-validated entities.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self, RegistryLoadError> {
        let mut registry = Self {
            entities: Vec::with_capacity(entities.len()),
            by_id: HashMap::with_capacity(entities.len()),
            by_category: BTreeMap::new(),
            tokens: PostingIndex::default(),
            related_tags: PostingIndex::default(),
            search_text: Vec::with_capacity(entities.len()),
            aliases: HashMap::new(),
            manifest: None,
        };

        for entity in entities {
            let position = registry.entities.len();
            if registry.by_id.contains_key(&entity.id) {
                return Err(RegistryLoadError::DuplicateId { id: entity.id });
            }
            registry.by_id.insert(entity.id.clone(), position);
            registry
                .by_category
                .entry(entity.category)
                .or_default()
                .push(position);

            let mut indexed: Vec<&str> = vec![entity.name.as_str()];
            indexed.extend(entity.alternate_names.iter().map(String::as_str));
            indexed.extend(entity.text_fields());
            indexed.extend(entity.list_fields());
            for field in indexed {
                for token in tokenize(field) {
                    registry.tokens.insert(token, position);
                }
            }
            for value in entity.list_fields() {
                registry.related_tags.insert(normalize_query(value), position);
            }

            registry.search_text.push(
                entity
                    .searchable_fields()
                    .into_iter()
                    .map(str::to_lowercase)
                    .collect(),
            );
            registry.entities.push(Arc::new(entity));
        }

        Ok(registry)
    }

    /// Attaches the alias table. Every target must be a known entity id.
    pub fn with_aliases(
        mut self,
        aliases: HashMap<String, String>,
    ) -> Result<Self, RegistryLoadError> {
        for (alias, target) in &aliases {
            if !self.by_id.contains_key(target) {
                return Err(RegistryLoadError::UnknownAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        self.aliases = aliases;
        Ok(self)
    }

    /// Loads, verifies and indexes the corpus described by `config`.
    pub fn load(config: &CorpusConfig) -> Result<Self, RegistryLoadError> {
        let manifest_text = read_corpus_file(&config.source, MANIFEST_FILE)?;
        let manifest = Manifest::parse(&manifest_text)?;
        manifest.validate()?;

        let mut files = manifest.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        let mut contents: HashMap<String, Cow<'static, str>> = HashMap::new();
        for file in &files {
            let text = read_verified(&config.source, file)?;
            contents.insert(file.role.clone(), text);
        }

        let collections = [
            ("regions", config.load_regions),
            ("conditions", config.load_conditions),
            ("topics", config.load_topics),
        ];
        let mut entities = Vec::new();
        for (role, enabled) in collections {
            if !enabled {
                debug!(role, "collection disabled");
                continue;
            }
            let file = manifest.file_for_role(role)?;
            let text = contents.get(role).map(|text| &**text).unwrap_or_default();
            let parsed = parse_collection(&file.path, text)?;
            debug!(role, file = %file.path, entities = parsed.len(), "parsed collection");
            entities.extend(parsed);
        }

        let alias_file = manifest.file_for_role("aliases")?;
        let alias_text = contents.get("aliases").map(|text| &**text).unwrap_or_default();
        let mut aliases = parse_aliases(&alias_file.path, alias_text)?;

        let registry = Self::from_entities(entities)?;
        if !config.loads_everything() {
            let before = aliases.len();
            aliases.retain(|_, target| registry.by_id.contains_key(target));
            debug!(
                dropped = before - aliases.len(),
                "aliases skipped for disabled collections"
            );
        }
        let mut registry = registry.with_aliases(aliases)?;
        registry.manifest = Some(manifest);

        info!(
            entities = registry.len(),
            categories = registry.by_category.len(),
            aliases = registry.alias_count(),
            "corpus loaded"
        );
        Ok(registry)
    }

    /// Exact id lookup.
    pub fn get(&self, id: &str) -> Result<&Arc<Entity>, LookupError> {
        self.by_id
            .get(id)
            .map(|&position| &self.entities[position])
            .ok_or_else(|| LookupError::NotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Case-insensitive substring search over ids, names and content fields.
    ///
    /// An empty (or all-whitespace) query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Arc<Entity>> {
        let needle = normalize_query(query);
        self.entities
            .iter()
            .zip(&self.search_text)
            .filter(|(_, fields)| fields.iter().any(|field| field.contains(&needle)))
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Whole-token search through the inverted index; every query token
    /// must match.
    pub fn search_terms(&self, query: &str) -> Vec<&Arc<Entity>> {
        let terms: Vec<String> = tokenize(query).collect();
        let lists: Vec<&[usize]> = terms.iter().map(|term| self.tokens.get(term)).collect();
        self.at_positions(&intersect_sorted(&lists))
    }

    pub fn by_category(&self, category: Category) -> Vec<&Arc<Entity>> {
        self.by_category
            .get(&category)
            .map(|positions| self.at_positions(positions))
            .unwrap_or_default()
    }

    /// Exact (case-insensitive, trimmed) match against list-valued fields.
    pub fn by_related_tag(&self, tag: &str) -> Vec<&Arc<Entity>> {
        self.at_positions(self.related_tags.get(&normalize_query(tag)))
    }

    pub fn resolve_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias.trim()).map(String::as_str)
    }

    /// Entities in registry order.
    pub fn entities(&self) -> &[Arc<Entity>] {
        &self.entities
    }

    /// Non-empty categories with their entity counts, in category order.
    pub fn categories(&self) -> Vec<(Category, usize)> {
        self.by_category
            .iter()
            .map(|(category, positions)| (*category, positions.len()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Alias table sorted by alias.
    pub fn aliases(&self) -> BTreeMap<&str, &str> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
            .collect()
    }

    /// Manifest the registry was loaded from; `None` when built in memory.
    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    fn at_positions(&self, positions: &[usize]) -> Vec<&Arc<Entity>> {
        positions
            .iter()
            .map(|&position| &self.entities[position])
            .collect()
    }
}

fn read_corpus_file(
    source: &CorpusSource,
    path: &str,
) -> Result<Cow<'static, str>, RegistryLoadError> {
    match source {
        CorpusSource::Embedded => {
            embedded::file(path)
                .map(Cow::Borrowed)
                .ok_or_else(|| RegistryLoadError::MissingFile {
                    path: PathBuf::from(path),
                })
        }
        CorpusSource::Directory(root) => {
            let full_path = root.join(path);
            std::fs::read_to_string(&full_path)
                .map(Cow::Owned)
                .map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        RegistryLoadError::MissingFile { path: full_path }
                    } else {
                        RegistryLoadError::io(full_path, e)
                    }
                })
        }
    }
}

fn read_verified(
    source: &CorpusSource,
    file: &ManifestFile,
) -> Result<Cow<'static, str>, RegistryLoadError> {
    let text = read_corpus_file(source, &file.path)?;
    let actual = sha256_hex(text.as_bytes());
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(RegistryLoadError::Sha256Mismatch {
            path: display_path(source, &file.path),
            expected,
            actual,
        });
    }
    Ok(text)
}

fn display_path(source: &CorpusSource, path: &str) -> PathBuf {
    match source {
        CorpusSource::Embedded => Path::new("<embedded>").join(path),
        CorpusSource::Directory(root) => root.join(path),
    }
}
