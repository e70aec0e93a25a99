//! Rendering against the built-in corpus.

use std::sync::LazyLock;

use soma_cli::render::{
    categories_table, doctor_text, entity_list_table, entity_table, resolution_text,
};
use soma_corpus::{ContentRegistry, CorpusConfig, CorpusReport};
use soma_model::{Category, Level};
use soma_resolve::ContentFacade;

static FACADE: LazyLock<ContentFacade<ContentRegistry>> = LazyLock::new(|| {
    let registry = ContentRegistry::load(&CorpusConfig::default()).expect("embedded corpus");
    ContentFacade::new(registry)
});

fn level(value: u8) -> Level {
    Level::new(value).expect("valid level")
}

#[test]
fn search_table_lists_matches_in_corpus_order() {
    let results = FACADE.search("kidney");
    let rendered = entity_list_table(&results).to_string();
    let kidneys = rendered.find("kidneys").expect("kidneys row");
    let ckd = rendered.find("chronic-kidney-disease").expect("ckd row");
    assert!(kidneys < ckd);
    assert!(!rendered.contains("liver"));
}

#[test]
fn entity_table_shows_identity_and_references() {
    let heart = FACADE.lookup("heart").expect("heart");
    let rendered = entity_table(heart).to_string();
    assert!(rendered.contains("Cardiovascular System"));
    assert!(rendered.contains("1,2,3,4,5"));
    assert!(rendered.contains("Cardiac muscle"));
    assert!(rendered.contains("aorta"));
}

#[test]
fn exact_resolution_names_the_audience() {
    let resolution = FACADE.resolve("heart", level(2)).expect("resolve");
    let text = resolution_text(&resolution);
    assert!(text.starts_with("Heart [cardiovascular]"));
    assert!(text.contains("Level: 2 - Patient (requested 2)"));
    assert!(text.contains("Audience: General adult patients and caregivers"));
    assert!(!text.contains("is not available for this topic"));
    assert!(text.contains(&resolution.content.summary));
}

#[test]
fn fallback_level_is_called_out() {
    let resolution = FACADE.resolve("skin", level(5)).expect("resolve");
    let text = resolution_text(&resolution);
    assert!(text.contains("Level: 2 - Patient (requested 5)"));
    assert!(text.contains("level 5 is not available for this topic"));
}

#[test]
fn dangling_references_render_as_unavailable() {
    let resolution = FACADE.resolve("heart", level(1)).expect("resolve");
    let text = resolution_text(&resolution);
    assert!(text.contains("lungs"));
    assert!(text.contains("aorta (not available)"));
    assert!(text.contains("hypertension (not available)"));
}

#[test]
fn alias_and_synthesized_resolutions_are_marked() {
    let alias = FACADE.resolve("cardiac", level(3)).expect("resolve");
    assert!(resolution_text(&alias).contains("Alias: cardiac -> heart"));

    let synthesized = FACADE
        .resolve_with_label("retina-detachment", Some("Retinal Detachment"), level(4))
        .expect("resolve");
    let text = resolution_text(&synthesized);
    assert!(text.starts_with("Retinal Detachment [unclassified]"));
    assert!(text.contains("Note: generated placeholder, no curated content"));
    assert!(text.contains("Level: 1 - Child (requested 4)"));
}

#[test]
fn categories_table_counts_entities() {
    let rendered = categories_table(&FACADE.source().categories()).to_string();
    assert!(rendered.contains("Digestive System"));
    assert!(rendered.contains("pharmacogenomics"));
    assert!(!rendered.contains("unclassified"));
}

#[test]
fn doctor_text_reports_pins_counts_and_warnings() {
    let report = CorpusReport::build(FACADE.source());
    let text = doctor_text(&report);
    assert!(text.starts_with("Corpus 2024.10 (content schema 1)"));
    assert!(text.contains("Entities"));
    assert!(text.contains("missing-level"));
    assert!(text.contains("warfarin"));
    assert!(!report.has_errors());
}

#[test]
fn empty_category_renders_header_only() {
    let results = FACADE.by_category(Category::Reproductive);
    assert!(results.is_empty());
    let rendered = entity_list_table(&results).to_string();
    assert!(rendered.contains("Category"));
}

#[test]
fn label_match_is_marked() {
    let resolution = FACADE
        .resolve_with_label("menu-kidney", Some("Kidneys"), level(2))
        .expect("resolve");
    let text = resolution_text(&resolution);
    assert!(text.starts_with("Kidneys [urinary]"));
    assert!(text.contains("Matched by name: menu-kidney -> kidneys"));
}
