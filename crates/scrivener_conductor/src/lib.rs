//! Orchestration of the writing pipeline.
//!
//! A [`Conductor`] owns the author, critic, editor and human and sequences
//! their calls into two stages:
//!
//! - **develop**: starter idea, parallel ideation, selection, plot, themes,
//!   characters, world and storyline, one critique and revision pass, and a
//!   summary
//! - **draft**: chapters ([`PaperbackWriter`]) or segments
//!   ([`HistoryPodcaster`]) written in bounded context windows
//!
//! Every stage leaves plain files behind in the project directory.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod conductor;
mod files;
mod ideation;
mod operation;
mod paperback;
mod pipeline;
mod podcaster;
mod settings;

pub use conductor::Conductor;
pub use settings::{
    ActorsConfig, CONFIG_FILE_NAME, DraftConfig, ENV_PREFIX, IdeationConfig, LongformConfig,
    PodcastConfig, PromptsConfig, ScrivenerConfig,
};
pub use pipeline::ConductorCore;
pub use files::{
    CONCEPT_FILE, CONTEXT_FILE, SUMMARY_FILE, chapter_file_name, project_dir_name,
    segment_file_name,
};
pub use ideation::ideate_parallel;
pub use operation::{Operation, RunOutcome};
pub use paperback::PaperbackWriter;
pub use podcaster::HistoryPodcaster;

use scrivener_actors::Human;
use scrivener_core::Genre;
use scrivener_error::ScrivenerResult;
use scrivener_interface::SharedDriver;
use std::path::Path;

/// Conductor for `genre`.
pub fn build_conductor(
    genre: Genre,
    working_dir: impl AsRef<Path>,
    config: ScrivenerConfig,
    driver: SharedDriver,
    human: Human,
) -> ScrivenerResult<Box<dyn Conductor>> {
    Ok(match genre {
        Genre::LongformFiction => Box::new(PaperbackWriter::new(working_dir, config, driver, human)?),
        Genre::Podcast => Box::new(HistoryPodcaster::new(working_dir, config, driver, human)?),
    })
}
