//! Lookup and search behavior against the embedded corpus.

use soma_corpus::{ContentRegistry, CorpusConfig, LookupError};
use soma_model::{Category, EntityKind};

fn registry() -> ContentRegistry {
    ContentRegistry::load(&CorpusConfig::default()).expect("embedded corpus loads")
}

fn ids(entities: &[&std::sync::Arc<soma_model::Entity>]) -> Vec<String> {
    entities.iter().map(|entity| entity.id.clone()).collect()
}

#[test]
fn embedded_corpus_loads_all_collections() {
    let registry = registry();
    assert_eq!(registry.len(), 20);
    assert_eq!(registry.alias_count(), 10);
    assert!(registry.manifest().is_some());
    assert_eq!(registry.entities()[0].id, "heart");
    assert_eq!(registry.entities()[19].id, "blood-brain-barrier");
}

#[test]
fn get_heart_is_cardiovascular() {
    let registry = registry();
    let heart = registry.get("heart").expect("heart exists");
    assert_eq!(heart.category, Category::Cardiovascular);
    assert_eq!(heart.kind(), EntityKind::Region);
}

#[test]
fn get_is_exact() {
    let registry = registry();
    assert_eq!(
        registry.get("Heart").unwrap_err(),
        LookupError::NotFound {
            id: "Heart".to_string()
        }
    );
}

#[test]
fn search_kidney_finds_kidneys_not_liver() {
    let registry = registry();
    let found = ids(&registry.search("kidney"));
    assert!(found.contains(&"kidneys".to_string()));
    assert!(!found.contains(&"liver".to_string()));
    assert_eq!(found, vec!["kidneys", "chronic-kidney-disease"]);
}

#[test]
fn search_matches_list_values_and_keeps_registry_order() {
    let registry = registry();
    assert_eq!(
        ids(&registry.search("  HEART ")),
        vec!["heart", "esophagus", "gerd"]
    );
    assert_eq!(
        ids(&registry.search("cyp2c19")),
        vec!["pharmacogenomics-basics", "clopidogrel-response"]
    );
}

#[test]
fn empty_query_returns_whole_corpus() {
    let registry = registry();
    let corpus_order: Vec<String> = registry
        .entities()
        .iter()
        .map(|entity| entity.id.clone())
        .collect();
    assert_eq!(corpus_order.len(), 20);
    assert_eq!(ids(&registry.search("")), corpus_order);
    assert_eq!(ids(&registry.search("   ")), corpus_order);
}

#[test]
fn related_tag_gerd_contains_esophagus() {
    let registry = registry();
    let found = ids(&registry.by_related_tag("gerd"));
    assert_eq!(found, vec!["esophagus", "stomach"]);
    assert_eq!(ids(&registry.by_related_tag(" GERD ")), found);
}

#[test]
fn related_tag_is_exact_not_substring() {
    let registry = registry();
    assert!(registry.by_related_tag("breath").is_empty());
    assert_eq!(
        ids(&registry.by_related_tag("shortness of breath")),
        vec!["heart", "lungs"]
    );
}

#[test]
fn by_category_preserves_order() {
    let registry = registry();
    assert_eq!(
        ids(&registry.by_category(Category::Digestive)),
        vec!["esophagus", "stomach", "liver", "gerd"]
    );
    assert!(registry.by_category(Category::Unclassified).is_empty());
}

#[test]
fn search_terms_requires_every_token() {
    let registry = registry();
    assert_eq!(
        ids(&registry.search_terms("autosomal recessive")),
        vec!["cystic-fibrosis", "sickle-cell-disease"]
    );
    assert_eq!(
        ids(&registry.search_terms("Upper Endoscopy")),
        vec!["esophagus", "stomach"]
    );
    assert!(registry.search_terms("kidn").is_empty());
    assert!(registry.search_terms("").is_empty());
}

#[test]
fn aliases_resolve_to_curated_ids() {
    let registry = registry();
    assert_eq!(registry.resolve_alias("cardiac"), Some("heart"));
    assert_eq!(registry.resolve_alias(" renal "), Some("kidneys"));
    assert_eq!(registry.resolve_alias("heart"), None);
}

#[test]
fn categories_are_counted_in_category_order() {
    let registry = registry();
    let categories = registry.categories();
    assert_eq!(categories[0], (Category::Cardiovascular, 1));
    assert!(categories.contains(&(Category::Pharmacogenomics, 4)));
    let total: usize = categories.iter().map(|(_, count)| count).sum();
    assert_eq!(total, registry.len());
}

#[test]
fn disabled_collections_drop_their_aliases() {
    let config = CorpusConfig::default().with_conditions(false).with_topics(false);
    let registry = ContentRegistry::load(&config).expect("regions only");
    assert_eq!(registry.len(), 10);
    assert_eq!(registry.resolve_alias("cardiac"), Some("heart"));
    assert_eq!(registry.resolve_alias("cf"), None);
    assert_eq!(registry.alias_count(), 3);
}
