//! Consumer facade: the single entry point used by the presentation layer.
//!
//! The facade composes lookup, alias resolution, label search, fallback
//! synthesis, level resolution and cross-reference resolution. It memoizes
//! successful resolutions and tracks per-slot request state so that a stale result
//! never overwrites a newer request (last request wins).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde::Serialize;
use tracing::debug;

use soma_corpus::{ContentSource, LookupError};
use soma_model::{Category, Entity, Level, LevelContent};

use crate::crossref::{ResolvedReference, resolve_cross_references};
use crate::error::ResolveError;
use crate::level::resolve_level;
use crate::synth::synthesize;

/// How a resolution found its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedVia {
    Direct,
    Alias,
    /// The id missed; a corpus search on the caller's label found it.
    Label,
    Synthesized,
}

impl ResolvedVia {
    /// Whether the caller's label took part in producing the result.
    pub fn depends_on_label(self) -> bool {
        matches!(self, ResolvedVia::Label | ResolvedVia::Synthesized)
    }
}

/// Concrete content for one `(id, level)` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// Identifier as requested (may be an alias).
    pub requested_id: String,
    pub entity: Arc<Entity>,
    pub requested_level: Level,
    pub served_level: Level,
    pub content: LevelContent,
    pub synthesized: bool,
    pub via: ResolvedVia,
    pub cross_references: Vec<ResolvedReference>,
}

impl Resolution {
    pub fn is_exact_level(&self) -> bool {
        self.requested_level == self.served_level
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeConfig {
    /// Cache successful resolutions per `(id, level, label)`.
    pub memoize: bool,
    /// Level used when the caller does not ask for one.
    pub default_level: Level,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            default_level: Level::default(),
        }
    }
}

impl FacadeConfig {
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn with_default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }
}

/// Lifecycle of the latest request bound to a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Pending {
        generation: u64,
        id: String,
        level: Level,
    },
    Resolved(Arc<Resolution>),
    Failed(ResolveError),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending { .. })
    }
}

/// Handle for an in-flight request, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub slot: String,
    pub id: String,
    pub level: Level,
    pub label: Option<String>,
    pub generation: u64,
}

/// Outcome of completing a ticket.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The ticket was still the newest for its slot; its result is now the
    /// slot state.
    Applied(RequestState),
    /// A newer request took the slot; the result was discarded.
    Superseded,
}

impl Completion {
    pub fn resolution(&self) -> Option<&Arc<Resolution>> {
        match self {
            Completion::Applied(RequestState::Resolved(resolution)) => Some(resolution),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacadeStats {
    pub entities: usize,
    pub aliases: usize,
    pub cached_resolutions: usize,
    pub active_slots: usize,
    pub synthesized_served: u64,
    pub cache_hits: u64,
}

/// Memo key. `label` is only set for results the label influenced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    id: String,
    level: Level,
    label: Option<String>,
}

impl CacheKey {
    fn new(id: &str, level: Level, label: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            level,
            label: label.map(str::to_string),
        }
    }
}

#[derive(Debug)]
struct SlotEntry {
    generation: u64,
    state: RequestState,
}

/// Entry point for the presentation layer.
///
/// All operations take `&self`; the memo cache and slot table use interior
/// mutability, so a facade can be shared behind an `Arc`.
#[derive(Debug)]
pub struct ContentFacade<S> {
    source: S,
    config: FacadeConfig,
    cache: RwLock<HashMap<CacheKey, Arc<Resolution>>>,
    slots: Mutex<HashMap<String, SlotEntry>>,
    generation: AtomicU64,
    synthesized_served: AtomicU64,
    cache_hits: AtomicU64,
}

impl<S: ContentSource> ContentFacade<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, FacadeConfig::default())
    }

    pub fn with_config(source: S, config: FacadeConfig) -> Self {
        Self {
            source,
            config,
            cache: RwLock::new(HashMap::new()),
            slots: Mutex::new(HashMap::new()),
            generation: AtomicU64::new(0),
            synthesized_served: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    pub fn lookup(&self, id: &str) -> Result<&Arc<Entity>, LookupError> {
        self.source.get(id)
    }

    pub fn search(&self, query: &str) -> Vec<&Arc<Entity>> {
        self.source.search(query)
    }

    pub fn by_category(&self, category: Category) -> Vec<&Arc<Entity>> {
        self.source.by_category(category)
    }

    pub fn by_related_tag(&self, tag: &str) -> Vec<&Arc<Entity>> {
        self.source.by_related_tag(tag)
    }

    /// Resolves `id` at `level`: curated entity, then alias, then a
    /// synthesized fallback.
    pub fn resolve(&self, id: &str, level: Level) -> Result<Arc<Resolution>, ResolveError> {
        self.resolve_with_label(id, None, level)
    }

    /// Resolves at the configured default level.
    pub fn resolve_default(&self, id: &str) -> Result<Arc<Resolution>, ResolveError> {
        self.resolve(id, self.config.default_level)
    }

    /// As [`resolve`](Self::resolve), with a display label for the topic.
    ///
    /// When neither the id nor an alias is known, the label is searched in
    /// the corpus and the first match is served. Only if that also misses
    /// is a fallback synthesized, named after the label.
    pub fn resolve_with_label(
        &self,
        id: &str,
        label: Option<&str>,
        level: Level,
    ) -> Result<Arc<Resolution>, ResolveError> {
        if self.config.memoize
            && let Some(hit) = self.cached(id, label, level)
        {
            debug!(id, %level, "resolution cache hit");
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            self.count_synthesized(&hit);
            return Ok(hit);
        }

        let computed = Arc::new(self.compute(id, label, level)?);
        let resolution = if self.config.memoize {
            let key_label = label.filter(|_| computed.via.depends_on_label());
            let key = CacheKey::new(id, level, key_label);
            let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(cache.entry(key).or_insert(computed))
        } else {
            computed
        };
        self.count_synthesized(&resolution);
        Ok(resolution)
    }

    /// Resolves every `(id, level)` pair, in input order.
    pub fn resolve_batch<'a, I>(&self, items: I) -> Vec<(String, Result<Arc<Resolution>, ResolveError>)>
    where
        I: IntoIterator<Item = (&'a str, Level)>,
    {
        items
            .into_iter()
            .map(|(id, level)| (id.to_string(), self.resolve(id, level)))
            .collect()
    }

    /// Starts a request for `slot`, superseding any earlier one.
    pub fn begin(&self, slot: &str, id: &str, level: Level) -> RequestTicket {
        self.begin_with_label(slot, id, None, level)
    }

    pub fn begin_with_label(
        &self,
        slot: &str,
        id: &str,
        label: Option<&str>,
        level: Level,
    ) -> RequestTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(
            slot.to_string(),
            SlotEntry {
                generation,
                state: RequestState::Pending {
                    generation,
                    id: id.to_string(),
                    level,
                },
            },
        );
        RequestTicket {
            slot: slot.to_string(),
            id: id.to_string(),
            level,
            label: label.map(str::to_string),
            generation,
        }
    }

    /// Resolves the ticket and applies the result if it is still current.
    pub fn complete(&self, ticket: RequestTicket) -> Completion {
        if !self.is_current(&ticket) {
            debug!(slot = %ticket.slot, generation = ticket.generation, "request superseded");
            return Completion::Superseded;
        }

        let state = match self.resolve_with_label(&ticket.id, ticket.label.as_deref(), ticket.level)
        {
            Ok(resolution) => RequestState::Resolved(resolution),
            Err(err) => RequestState::Failed(err),
        };

        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        match slots.get_mut(&ticket.slot) {
            Some(entry) if entry.generation == ticket.generation => {
                entry.state = state.clone();
                Completion::Applied(state)
            }
            _ => {
                debug!(slot = %ticket.slot, generation = ticket.generation, "request superseded");
                Completion::Superseded
            }
        }
    }

    /// Begins and completes a request in one step.
    pub fn request(&self, slot: &str, id: &str, level: Level) -> Completion {
        self.complete(self.begin(slot, id, level))
    }

    /// Current state of a slot, if anything was ever requested for it.
    pub fn state(&self, slot: &str) -> Option<RequestState> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(slot).map(|entry| entry.state.clone())
    }

    /// Forgets a slot (e.g. when its view goes away).
    pub fn release(&self, slot: &str) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(slot).is_some()
    }

    /// Drops every memoized resolution.
    pub fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn stats(&self) -> FacadeStats {
        let cached_resolutions = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        let active_slots = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        FacadeStats {
            entities: self.source.len(),
            aliases: self.source.alias_count(),
            cached_resolutions,
            active_slots,
            synthesized_served: self.synthesized_served.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }

    fn is_current(&self, ticket: &RequestTicket) -> bool {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&ticket.slot)
            .is_some_and(|entry| entry.generation == ticket.generation)
    }

    /// Curated results are shared across labels; label-driven results are
    /// not.
    fn cached(&self, id: &str, label: Option<&str>, level: Level) -> Option<Arc<Resolution>> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = cache.get(&CacheKey::new(id, level, None))
            && (label.is_none() || !hit.via.depends_on_label())
        {
            return Some(Arc::clone(hit));
        }
        let label = label?;
        cache.get(&CacheKey::new(id, level, Some(label))).cloned()
    }

    fn count_synthesized(&self, resolution: &Resolution) {
        if resolution.synthesized {
            self.synthesized_served.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn compute(
        &self,
        id: &str,
        label: Option<&str>,
        level: Level,
    ) -> Result<Resolution, ResolveError> {
        let (entity, via) = self.locate(id, label);

        let resolved = resolve_level(&entity, level)?;
        let served_level = resolved.served;
        let content = resolved.content.clone();
        let cross_references = resolve_cross_references(&self.source, &entity);

        Ok(Resolution {
            requested_id: id.to_string(),
            synthesized: entity.synthesized,
            requested_level: level,
            served_level,
            content,
            via,
            cross_references,
            entity,
        })
    }

    /// Direct id, then alias, then label search, then synthesis. Ids are
    /// trimmed for the lookups; a synthesized entity keeps the id as given.
    fn locate(&self, id: &str, label: Option<&str>) -> (Arc<Entity>, ResolvedVia) {
        let trimmed = id.trim();
        if let Ok(entity) = self.source.get(trimmed) {
            return (Arc::clone(entity), ResolvedVia::Direct);
        }
        if let Some(entity) = self.alias_target(trimmed) {
            debug!(alias = trimmed, target = %entity.id, "resolved through alias");
            return (Arc::clone(entity), ResolvedVia::Alias);
        }
        if let Some(entity) = label.and_then(|label| self.label_match(label)) {
            debug!(id, target = %entity.id, "resolved through label search");
            return (Arc::clone(entity), ResolvedVia::Label);
        }
        debug!(id, "synthesizing fallback entity");
        (Arc::new(synthesize(id, label)), ResolvedVia::Synthesized)
    }

    fn label_match(&self, label: &str) -> Option<&Arc<Entity>> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        self.source.search(label).into_iter().next()
    }

    fn alias_target(&self, alias: &str) -> Option<&Arc<Entity>> {
        let target = self.source.resolve_alias(alias)?;
        self.source.get(target).ok()
    }
}
