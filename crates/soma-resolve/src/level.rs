//! Picks the level content to serve for a requested level.

use soma_model::{Entity, Level, LevelContent, LevelResolutionError};

/// Level content chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLevel<'a> {
    pub requested: Level,
    pub served: Level,
    pub content: &'a LevelContent,
}

impl ResolvedLevel<'_> {
    /// True when the requested level was served as-is.
    pub fn is_exact(&self) -> bool {
        self.requested == self.served
    }
}

/// Resolves `requested` against the levels present on `entity`.
///
/// Falls back to the nearest lower level, then to the lowest level present.
/// An entity with no levels is an authoring bug and is reported, never
/// papered over.
pub fn resolve_level(
    entity: &Entity,
    requested: Level,
) -> Result<ResolvedLevel<'_>, LevelResolutionError> {
    let chosen = entity
        .levels
        .get_key_value(&requested)
        .or_else(|| entity.levels.range(..requested).next_back())
        .or_else(|| entity.levels.iter().next());

    match chosen {
        Some((&served, content)) => Ok(ResolvedLevel {
            requested,
            served,
            content,
        }),
        None => Err(LevelResolutionError::NoLevels {
            id: entity.id.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::synthesize;

    fn level(n: u8) -> Level {
        Level::new(n).unwrap()
    }

    fn entity_with(levels: &[u8]) -> Entity {
        let mut entity = synthesize("test-entity", None);
        let template = entity.levels.values().next().cloned().unwrap();
        entity.levels.clear();
        for &n in levels {
            let mut content = template.clone();
            content.level = level(n);
            content.summary = format!("summary {n}");
            entity.levels.insert(level(n), content);
        }
        entity
    }

    #[test]
    fn exact_level_is_served() {
        let entity = entity_with(&[1, 2, 3]);
        let resolved = resolve_level(&entity, level(2)).unwrap();
        assert_eq!(resolved.served, level(2));
        assert!(resolved.is_exact());
        assert_eq!(resolved.content.summary, "summary 2");
    }

    #[test]
    fn falls_back_to_nearest_lower_level() {
        let entity = entity_with(&[1, 2, 3]);
        let resolved = resolve_level(&entity, level(5)).unwrap();
        assert_eq!(resolved.served, level(3));
        assert!(!resolved.is_exact());

        let gapped = entity_with(&[1, 4]);
        assert_eq!(resolve_level(&gapped, level(3)).unwrap().served, level(1));
    }

    #[test]
    fn falls_back_to_lowest_when_nothing_lower() {
        let entity = entity_with(&[3, 5]);
        assert_eq!(resolve_level(&entity, level(2)).unwrap().served, level(3));
    }

    #[test]
    fn no_levels_is_an_error() {
        let entity = entity_with(&[]);
        assert_eq!(
            resolve_level(&entity, level(3)),
            Err(LevelResolutionError::NoLevels {
                id: "test-entity".to_string()
            })
        );
    }
}
