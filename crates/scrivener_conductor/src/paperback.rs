//! Longform fiction, drafted chapter by chapter.

use crate::files::{chapter_file_name, read_context, require_dir, tail, write_text};
use crate::{Conductor, ConductorCore, ScrivenerConfig};
use async_trait::async_trait;
use scrivener_actors::Human;
use scrivener_core::Genre;
use scrivener_error::ScrivenerResult;
use scrivener_interface::SharedDriver;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Conductor for novels.
///
/// Each chapter is written page by page. A page sees the last few pages of
/// its chapter and the summaries of the last few chapters.
#[derive(Debug)]
pub struct PaperbackWriter {
    core: ConductorCore,
}

impl PaperbackWriter {
    /// Create a writer working in `working_dir`.
    pub fn new(
        working_dir: impl AsRef<Path>,
        config: ScrivenerConfig,
        driver: SharedDriver,
        human: Human,
    ) -> ScrivenerResult<Self> {
        Ok(Self {
            core: ConductorCore::new(Genre::LongformFiction, working_dir, config, driver, human)?,
        })
    }
}

#[async_trait]
impl Conductor for PaperbackWriter {
    fn core(&self) -> &ConductorCore {
        &self.core
    }

    #[instrument(skip(self, project_dir), fields(project_dir = %project_dir.display()))]
    async fn draft_narrative(&self, project_dir: &Path) -> ScrivenerResult<Vec<PathBuf>> {
        require_dir(project_dir)?;
        let context = read_context(project_dir).await?;
        let settings = self.core.config().draft().longform().clone();
        let chapters = *settings.chapters();
        let pages_per_chapter = *settings.pages_per_chapter();
        let total_pages = chapters * pages_per_chapter;
        info!(chapters, pages_per_chapter, "Drafting novel");

        let author = self.core.author();
        let editor = self.core.editor();
        let mut summaries: Vec<String> = Vec::new();
        let mut written = Vec::with_capacity(chapters);

        for chapter in 1..=chapters {
            let extended_context = tail(&summaries, *settings.summary_window(), "\n\n");
            let mut pages: Vec<String> = Vec::with_capacity(pages_per_chapter);

            for page in 1..=pages_per_chapter {
                let preceding = tail(&pages, *settings.section_window(), " ");
                let number = (chapter - 1) * pages_per_chapter + page;
                debug!(chapter, page, "Writing page");
                let text = author
                    .write_section(
                        &context,
                        *settings.words_per_page(),
                        number,
                        total_pages,
                        &preceding,
                        &extended_context,
                    )
                    .await?;
                pages.push(text.trim().to_string());
            }

            let mut text = pages.join(" ");
            if *settings.editorial_pass() {
                text = self.core.editorial_pass(&context, text).await?;
            }

            written.push(write_text(project_dir, &chapter_file_name(chapter), &text).await?);
            info!(chapter, "Chapter written");

            if chapter < chapters {
                summaries.push(editor.summarize_section(&text).await?);
            }
        }

        Ok(written)
    }
}
