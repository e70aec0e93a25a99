//! Fallback entities for identifiers the curated corpus does not know.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use soma_model::{
    Category, ContentStatus, Entity, EntityDetails, Level, LevelContent, Lifecycle, TopicDetails,
};

/// Name used when an id has no word characters to derive one from.
pub const UNTITLED: &str = "Untitled Topic";

const SYNTHESIZED_VERSION: &str = "0.0.0";

/// Builds a minimal, clearly-marked stand-in entity for `id`.
///
/// The result carries a single level-1 content with generic text and no
/// clinical claims. Never fails.
pub fn synthesize(id: &str, label_hint: Option<&str>) -> Entity {
    let name = match label_hint.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => display_name(id),
    };

    let content = LevelContent {
        level: Level::MIN,
        summary: format!("Detailed content about {name} is not available yet."),
        explanation: format!(
            "{name} is not yet covered by the curated library. \
             Reviewed material will appear here once it has been published."
        ),
        key_terms: Vec::new(),
        analogies: Vec::new(),
        clinical_notes: None,
    };

    // Synthesized records have no authoring history.
    let epoch = NaiveDate::default();

    Entity {
        id: id.to_string(),
        name,
        alternate_names: Vec::new(),
        category: Category::Unclassified,
        levels: BTreeMap::from([(Level::MIN, content)]),
        cross_references: Vec::new(),
        media: Vec::new(),
        citations: Vec::new(),
        lifecycle: Lifecycle {
            created_at: epoch,
            updated_at: epoch,
            version: SYNTHESIZED_VERSION.to_string(),
            status: ContentStatus::Draft,
        },
        details: EntityDetails::Topic(TopicDetails::default()),
        synthesized: true,
    }
}

/// Derives a display name from a slug: separators become spaces and each
/// word gets an upper-case initial.
///
/// `"nonexistent-topic-xyz"` becomes `"Nonexistent Topic Xyz"`; an id with
/// no alphanumeric characters becomes [`UNTITLED`].
pub fn display_name(id: &str) -> String {
    if !id.chars().any(char::is_alphanumeric) {
        return UNTITLED.to_string();
    }
    id.split(|c: char| matches!(c, '-' | '_' | '.' | '/') || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
