//! Tests for soma-model types.

use soma_model::{
    Category, ContentStatus, Entity, EntityDetails, EntityKind, Level, Relationship,
};

const HEART: &str = r#"{
    "id": "heart",
    "name": "Heart",
    "alternate_names": ["cardiac muscle"],
    "category": "cardiovascular",
    "levels": {
        "1": {
            "level": 1,
            "summary": "Your heart is a pump.",
            "explanation": "It squeezes to push blood around your body."
        },
        "3": {
            "level": 3,
            "summary": "Four-chambered muscular pump.",
            "explanation": "Right heart feeds the pulmonary circuit, left heart the systemic circuit.",
            "key_terms": [{ "term": "Systole", "definition": "Contraction phase" }],
            "clinical_notes": "Assess apical pulse for a full minute."
        }
    },
    "cross_references": [
        { "target_id": "lungs", "relationship": "related", "label": "Pulmonary circulation" },
        { "target_id": "aorta", "relationship": "see-also", "label": "Great vessels" }
    ],
    "lifecycle": {
        "created_at": "2024-01-15",
        "updated_at": "2024-06-01",
        "version": "1.2.0",
        "status": "published"
    },
    "details": {
        "kind": "region",
        "location": "Mediastinum, behind the sternum",
        "function": "Pumps blood",
        "conditions": ["Heart Failure", "Arrhythmia"],
        "symptoms": ["chest pain"]
    }
}"#;

#[test]
fn entity_parses_tagged_details() {
    let entity: Entity = serde_json::from_str(HEART).expect("parse heart");
    assert_eq!(entity.kind(), EntityKind::Region);
    assert_eq!(entity.category, Category::Cardiovascular);
    assert_eq!(entity.lifecycle.status, ContentStatus::Published);
    assert!(!entity.synthesized);

    let levels: Vec<u8> = entity.available_levels().map(Level::get).collect();
    assert_eq!(levels, vec![1, 3]);
    assert_eq!(entity.cross_references[1].relationship, Relationship::SeeAlso);

    match &entity.details {
        EntityDetails::Region(region) => {
            assert_eq!(region.conditions.len(), 2);
            assert!(region.procedures.is_empty());
        }
        other => panic!("expected region details, got {other:?}"),
    }
}

#[test]
fn searchable_fields_cover_names_and_lists() {
    let entity: Entity = serde_json::from_str(HEART).expect("parse heart");
    let fields = entity.searchable_fields();
    assert!(fields.contains(&"heart"));
    assert!(fields.contains(&"cardiac muscle"));
    assert!(fields.contains(&"Mediastinum, behind the sternum"));
    assert!(fields.contains(&"Arrhythmia"));
    assert_eq!(entity.list_fields(), vec!["Heart Failure", "Arrhythmia", "chest pain"]);
}

#[test]
fn out_of_range_level_key_is_rejected() {
    let json = HEART.replace("\"3\": {", "\"7\": {");
    assert!(serde_json::from_str::<Entity>(&json).is_err());
}

#[test]
fn unknown_detail_kind_is_rejected() {
    let json = HEART.replace("\"kind\": \"region\"", "\"kind\": \"organelle\"");
    assert!(serde_json::from_str::<Entity>(&json).is_err());
}

#[test]
fn stub_keeps_identity_fields() {
    let entity: Entity = serde_json::from_str(HEART).expect("parse heart");
    let stub = entity.stub();
    assert_eq!(stub.id, "heart");
    assert_eq!(stub.name, "Heart");
    assert_eq!(stub.category, Category::Cardiovascular);
}

#[test]
fn level_metadata_matches_audience_tiers() {
    let names: Vec<&str> = Level::ALL.iter().map(|level| level.name()).collect();
    assert_eq!(
        names,
        vec!["Child", "Patient", "Nursing", "Medical Student", "Physician"]
    );
    assert_eq!(Level::default().get(), 3);
    assert_eq!(Level::MIN.audience(), "Children ages 5-12");
    assert_eq!(Level::MAX.audience(), "Practicing physicians");
}
