//! CLI argument definitions.

use clap::Parser;
use scrivener_conductor::Operation;
use scrivener_core::Genre;
use scrivener_models::LlmEnvironment;
use std::path::PathBuf;

/// Scrivener - develop and draft novels and history podcasts with an LLM
#[derive(Parser, Debug)]
#[command(name = "scrivener")]
#[command(about = "Develop and draft novels and history podcasts with an LLM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// What to write: longform-fiction or podcast
    pub genre: Genre,

    /// Directory that holds project directories
    pub working_dir: PathBuf,

    /// Where model calls go (defaults to the configured environment)
    #[arg(short, long)]
    pub environment: Option<LlmEnvironment>,

    /// Stages to run, in order
    #[arg(short = 'o', long = "operations", num_args = 1.., default_value = "develop")]
    pub operations: Vec<Operation>,

    /// Existing project directory, relative to the working directory
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Configuration file layered over the defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
