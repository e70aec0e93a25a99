use soma_model::LevelResolutionError;
use thiserror::Error;

/// Failure to produce a resolution.
///
/// Absence of an entity is never an error (it is synthesized); only an
/// existing entity without any level content fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Level(#[from] LevelResolutionError),
}
