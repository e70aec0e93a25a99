#![deny(unsafe_code)]

//! Content resolution on top of the curated corpus.
//!
//! Given a topic identifier and a requested complexity level,
//! [`ContentFacade`] always produces something to show: the curated entity
//! at the nearest available level, or a clearly-marked synthesized stand-in
//! when the identifier is unknown.

pub mod crossref;
pub mod error;
pub mod facade;
pub mod level;
pub mod synth;

pub use crossref::{ResolvedReference, resolve_cross_references};
pub use error::ResolveError;
pub use facade::{
    Completion, ContentFacade, FacadeConfig, FacadeStats, RequestState, RequestTicket, Resolution,
    ResolvedVia,
};
pub use level::{ResolvedLevel, resolve_level};
pub use synth::{UNTITLED, display_name, synthesize};
