//! History podcast scripts, drafted segment by segment.

use crate::files::{read_context, require_dir, segment_file_name, tail, write_text};
use crate::{Conductor, ConductorCore, ScrivenerConfig};
use async_trait::async_trait;
use scrivener_actors::Human;
use scrivener_core::Genre;
use scrivener_error::ScrivenerResult;
use scrivener_interface::SharedDriver;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Conductor for podcast episodes.
#[derive(Debug)]
pub struct HistoryPodcaster {
    core: ConductorCore,
}

impl HistoryPodcaster {
    /// Create a podcaster working in `working_dir`.
    pub fn new(
        working_dir: impl AsRef<Path>,
        config: ScrivenerConfig,
        driver: SharedDriver,
        human: Human,
    ) -> ScrivenerResult<Self> {
        Ok(Self {
            core: ConductorCore::new(Genre::Podcast, working_dir, config, driver, human)?,
        })
    }
}

#[async_trait]
impl Conductor for HistoryPodcaster {
    fn core(&self) -> &ConductorCore {
        &self.core
    }

    #[instrument(skip(self, project_dir), fields(project_dir = %project_dir.display()))]
    async fn draft_narrative(&self, project_dir: &Path) -> ScrivenerResult<Vec<PathBuf>> {
        require_dir(project_dir)?;
        let context = read_context(project_dir).await?;
        let settings = self.core.config().draft().podcast().clone();
        let segments = *settings.segments();
        info!(segments, "Drafting episode");

        let mut summaries: Vec<String> = Vec::new();
        let mut previous = String::new();
        let mut written = Vec::with_capacity(segments);

        for segment in 1..=segments {
            let extended_context = tail(&summaries, *settings.summary_window(), "\n\n");
            let mut text = self
                .core
                .author()
                .write_section(
                    &context,
                    *settings.words_per_segment(),
                    segment,
                    segments,
                    &previous,
                    &extended_context,
                )
                .await?
                .trim()
                .to_string();

            if *settings.editorial_pass() {
                text = self.core.editorial_pass(&context, text).await?;
            }

            written.push(write_text(project_dir, &segment_file_name(segment), &text).await?);
            info!(segment, "Segment written");

            if segment < segments {
                summaries.push(self.core.editor().summarize_section(&text).await?);
            }
            previous = text;
        }

        Ok(written)
    }
}
