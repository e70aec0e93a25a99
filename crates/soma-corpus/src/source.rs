//! Read-only repository seam between the corpus and its consumers.

use std::sync::Arc;

use soma_model::{Category, Entity};

use crate::error::LookupError;
use crate::registry::ContentRegistry;

/// Query surface the resolution layer depends on.
///
/// [`ContentRegistry`] is the production implementation; tests substitute
/// in-memory sources to observe how often the corpus is consulted.
pub trait ContentSource {
    fn get(&self, id: &str) -> Result<&Arc<Entity>, LookupError>;

    fn search(&self, query: &str) -> Vec<&Arc<Entity>>;

    fn by_category(&self, category: Category) -> Vec<&Arc<Entity>>;

    fn by_related_tag(&self, tag: &str) -> Vec<&Arc<Entity>>;

    /// Maps an alternate identifier onto a curated entity id.
    fn resolve_alias(&self, _alias: &str) -> Option<&str> {
        None
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn alias_count(&self) -> usize {
        0
    }
}

impl ContentSource for ContentRegistry {
    fn get(&self, id: &str) -> Result<&Arc<Entity>, LookupError> {
        ContentRegistry::get(self, id)
    }

    fn search(&self, query: &str) -> Vec<&Arc<Entity>> {
        ContentRegistry::search(self, query)
    }

    fn by_category(&self, category: Category) -> Vec<&Arc<Entity>> {
        ContentRegistry::by_category(self, category)
    }

    fn by_related_tag(&self, tag: &str) -> Vec<&Arc<Entity>> {
        ContentRegistry::by_related_tag(self, tag)
    }

    fn resolve_alias(&self, alias: &str) -> Option<&str> {
        ContentRegistry::resolve_alias(self, alias)
    }

    fn len(&self) -> usize {
        ContentRegistry::len(self)
    }

    fn alias_count(&self) -> usize {
        ContentRegistry::alias_count(self)
    }
}

impl<S: ContentSource + ?Sized> ContentSource for Arc<S> {
    fn get(&self, id: &str) -> Result<&Arc<Entity>, LookupError> {
        (**self).get(id)
    }

    fn search(&self, query: &str) -> Vec<&Arc<Entity>> {
        (**self).search(query)
    }

    fn by_category(&self, category: Category) -> Vec<&Arc<Entity>> {
        (**self).by_category(category)
    }

    fn by_related_tag(&self, tag: &str) -> Vec<&Arc<Entity>> {
        (**self).by_related_tag(tag)
    }

    fn resolve_alias(&self, alias: &str) -> Option<&str> {
        (**self).resolve_alias(alias)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn alias_count(&self) -> usize {
        (**self).alias_count()
    }
}
