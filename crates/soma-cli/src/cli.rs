//! CLI argument definitions for `soma`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "soma",
    version,
    about = "Look up and resolve curated anatomy, condition and pharmacogenomics content",
    long_about = "Look up and resolve curated medical content.\n\n\
                  Every topic is written for five audiences, from children (level 1)\n\
                  to physicians (level 5). Unknown topics resolve to a placeholder."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Read the corpus from this directory instead of the built-in copy.
    ///
    /// Falls back to the SOMA_CORPUS_DIR environment variable.
    #[arg(long = "corpus-dir", value_name = "DIR", global = true)]
    pub corpus_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one entity by its exact id.
    Lookup(LookupArgs),

    /// Find entities whose names or details contain the query.
    Search(SearchArgs),

    /// List the entities of one category.
    Category(CategoryArgs),

    /// List entities whose related lists mention a tag.
    Related(RelatedArgs),

    /// Resolve a topic at a complexity level (never fails for unknown ids).
    Resolve(ResolveArgs),

    /// List categories with entity counts.
    Categories,

    /// Audit the corpus and print a report.
    Doctor(DoctorArgs),
}

#[derive(Args)]
pub struct OutputArgs {
    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct SearchArgs {
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Match whole words (every word must appear) instead of substrings.
    #[arg(long = "terms")]
    pub terms: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct CategoryArgs {
    /// Category tag, e.g. cardiovascular or pharmacogenomics.
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct RelatedArgs {
    #[arg(value_name = "TAG")]
    pub tag: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct ResolveArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    /// Complexity level, 1 (child) to 5 (physician). Defaults to 3.
    #[arg(long = "level", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub level: Option<u8>,

    /// Display name to use if the topic has to be synthesized.
    #[arg(long = "label", value_name = "TEXT")]
    pub label: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct DoctorArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
