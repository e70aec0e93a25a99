use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use soma_corpus::{ContentRegistry, CorpusConfig, CorpusReport};
use soma_model::{Category, Entity, Level};
use soma_resolve::ContentFacade;
use soma_cli::render::{
    categories_table, doctor_text, entity_list_table, entity_table, resolution_text,
};

use crate::cli::{CategoryArgs, DoctorArgs, LookupArgs, RelatedArgs, ResolveArgs, SearchArgs};

/// Commands share one facade over the configured corpus.
pub struct Session {
    facade: ContentFacade<ContentRegistry>,
}

impl Session {
    pub fn open(corpus_dir: Option<&std::path::Path>) -> Result<Self> {
        let mut config = CorpusConfig::from_env();
        if let Some(dir) = corpus_dir {
            config = config.with_directory(dir);
        }
        let registry = ContentRegistry::load(&config).context("load corpus")?;
        Ok(Self {
            facade: ContentFacade::new(registry),
        })
    }

    fn registry(&self) -> &ContentRegistry {
        self.facade.source()
    }
}

pub fn run_lookup(session: &Session, args: &LookupArgs) -> Result<()> {
    let entity = session
        .facade
        .lookup(&args.id)
        .with_context(|| format!("lookup '{}'", args.id))?;
    if args.output.json {
        return print_json(entity);
    }
    println!("{}", entity_table(entity));
    Ok(())
}

pub fn run_search(session: &Session, args: &SearchArgs) -> Result<()> {
    let results = if args.terms {
        session.registry().search_terms(&args.query)
    } else {
        session.facade.search(&args.query)
    };
    print_entities(&results, args.output.json, || {
        format!("No entities match '{}'.", args.query)
    })
}

pub fn run_category(session: &Session, args: &CategoryArgs) -> Result<()> {
    let category = args.category.parse::<Category>()?;
    let results = session.facade.by_category(category);
    print_entities(&results, args.output.json, || {
        format!("No entities in {}.", category.label())
    })
}

pub fn run_related(session: &Session, args: &RelatedArgs) -> Result<()> {
    let results = session.facade.by_related_tag(&args.tag);
    print_entities(&results, args.output.json, || {
        format!("No entities mention '{}'.", args.tag)
    })
}

pub fn run_resolve(session: &Session, args: &ResolveArgs) -> Result<()> {
    let span = info_span!("resolve", id = %args.id);
    let _guard = span.enter();
    let level = match args.level {
        Some(value) => Level::new(value)?,
        None => session.facade.config().default_level,
    };
    let resolution = session
        .facade
        .resolve_with_label(&args.id, args.label.as_deref(), level)
        .with_context(|| format!("resolve '{}' at level {level}", args.id))?;
    if args.output.json {
        return print_json(&resolution);
    }
    print!("{}", resolution_text(&resolution));
    Ok(())
}

pub fn run_categories(session: &Session) -> Result<()> {
    println!("{}", categories_table(&session.registry().categories()));
    Ok(())
}

/// Prints the doctor report; returns true when it contains errors.
pub fn run_doctor(session: &Session, args: &DoctorArgs) -> Result<bool> {
    let report = CorpusReport::build(session.registry());
    if args.output.json {
        print_json(&report)?;
    } else {
        print!("{}", doctor_text(&report));
    }
    Ok(report.has_errors())
}

fn print_entities(
    entities: &[&Arc<Entity>],
    json: bool,
    empty_message: impl FnOnce() -> String,
) -> Result<()> {
    if json {
        return print_json(entities);
    }
    if entities.is_empty() {
        println!("{}", empty_message());
    } else {
        println!("{}", entity_list_table(entities));
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
