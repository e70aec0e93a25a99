use soma_corpus::doctor::audit;
use soma_corpus::record::parse_collection;
use soma_corpus::{ContentRegistry, CorpusConfig, CorpusReport};
use soma_model::IssueSeverity;

fn level(number: u8, summary: &str, explanation: &str, term: &str, definition: &str) -> String {
    format!(
        r#"{{ "level": {number}, "summary": "{summary}", "explanation": "{explanation}",
             "key_terms": [{{ "term": "{term}", "definition": "{definition}" }}] }}"#
    )
}

fn topic(id: &str, name: &str, levels: &[String], target: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "name": "{name}",
            "category": "genetics",
            "levels": [{}],
            "cross_references": [{{ "target_id": "{target}", "relationship": "related", "label": "See" }}],
            "lifecycle": {{ "created_at": "2024-01-01", "updated_at": "2024-01-02", "version": "0.1.0", "status": "draft" }},
            "details": {{ "kind": "topic", "description": "Test topic" }}
        }}"#,
        levels.join(",")
    )
}

fn clean_levels() -> Vec<String> {
    (1..=5)
        .map(|n| level(n, "Summary", "Explanation", "Allele", "Gene variant"))
        .collect()
}

fn small_registry() -> ContentRegistry {
    let mut draft_levels = clean_levels();
    draft_levels[0] = level(1, "TODO: write summary", "", "Allele", "");
    let collection = format!(
        "[{}, {}]",
        topic("draft-topic", "Draft Topic", &draft_levels, "ghost"),
        topic("allele", "Allele", &clean_levels(), "draft-topic"),
    );
    let entities = parse_collection("topics.json", &collection).unwrap();
    ContentRegistry::from_entities(entities).unwrap()
}

#[test]
fn doctor_report_snapshot_is_stable() {
    let report = CorpusReport::build(&small_registry());
    assert!(report.has_errors());

    insta::assert_json_snapshot!(report, @r#"
    {
      "schema": "soma.corpus-doctor",
      "schema_version": 1,
      "pins": null,
      "files": [],
      "counts": {
        "files": 0,
        "entities": 2,
        "regions": 0,
        "conditions": 0,
        "topics": 2,
        "aliases": 0,
        "by_category": {
          "genetics": 2
        },
        "errors": 3,
        "warnings": 1
      },
      "issues": [
        {
          "entity_id": "draft-topic",
          "check": "empty-explanation",
          "message": "level 1: missing or empty explanation",
          "severity": "error",
          "level": 1
        },
        {
          "entity_id": "draft-topic",
          "check": "empty-key-term",
          "message": "level 1: key term 'Allele' is incomplete",
          "severity": "error",
          "level": 1
        },
        {
          "entity_id": "draft-topic",
          "check": "placeholder",
          "message": "level 1: text contains placeholder markers",
          "severity": "error",
          "level": 1
        },
        {
          "entity_id": "draft-topic",
          "check": "dangling-reference",
          "message": "related reference to 'ghost' does not resolve",
          "severity": "warning",
          "level": null
        }
      ]
    }
    "#);
}

#[test]
fn embedded_corpus_has_no_authoring_errors() {
    let registry = ContentRegistry::load(&CorpusConfig::default()).unwrap();
    let report = CorpusReport::build(&registry);

    assert!(!report.has_errors(), "unexpected errors: {:?}", report.issues);
    assert_eq!(report.counts.files, 4);
    assert_eq!(report.counts.regions, 10);
    assert_eq!(report.counts.conditions, 5);
    assert_eq!(report.counts.topics, 5);
    assert_eq!(report.pins.as_ref().map(|pins| pins.corpus.as_str()), Some("2024.10"));

    let audit = audit(&registry);
    let heart_dangling: Vec<_> = audit
        .for_entity("heart")
        .filter(|issue| issue.check == "dangling-reference")
        .collect();
    assert_eq!(heart_dangling.len(), 2);
    assert!(heart_dangling.iter().all(|issue| issue.severity == IssueSeverity::Warning));
}

#[test]
fn partial_levels_are_warnings() {
    let registry = ContentRegistry::load(&CorpusConfig::default()).unwrap();
    let missing: Vec<u8> = audit(&registry)
        .for_entity("warfarin-sensitivity")
        .filter(|issue| issue.check == "missing-level")
        .filter_map(|issue| issue.level)
        .collect();
    assert_eq!(missing, vec![1, 2, 4, 5]);
}
