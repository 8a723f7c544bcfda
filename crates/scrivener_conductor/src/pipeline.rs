//! Actors and settings shared by every conductor.

use crate::files::{
    CONCEPT_FILE, CONTEXT_FILE, SUMMARY_FILE, create_project_dir, project_dir_name, require_dir,
    write_context, write_text,
};
use crate::{ScrivenerConfig, ideate_parallel};
use scrivener_actors::{Actor, Author, Critic, Editor, Human, needs_changes};
use scrivener_core::{Genre, StoryContext, utc_now_compact};
use scrivener_error::{ConductorError, ConductorErrorKind, ScrivenerResult};
use scrivener_interface::SharedDriver;
use scrivener_prompts::PromptManager;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

/// Validated inputs and the four actors of a pipeline.
#[derive(Debug)]
pub struct ConductorCore {
    genre: Genre,
    working_dir: PathBuf,
    config: ScrivenerConfig,
    author: Author,
    critic: Critic,
    editor: Editor,
    human: Human,
}

impl ConductorCore {
    /// Validate inputs and start the actors.
    ///
    /// # Errors
    ///
    /// Fails with [`ConductorErrorKind::MissingDirectory`] when the working
    /// directory does not exist and [`ConductorErrorKind::MissingFile`] when
    /// a configured prompt file does not exist. Relative prompt paths resolve
    /// against the working directory.
    #[instrument(skip(working_dir, config, driver, human), fields(working_dir = %working_dir.as_ref().display()))]
    pub fn new(
        genre: Genre,
        working_dir: impl AsRef<Path>,
        config: ScrivenerConfig,
        driver: SharedDriver,
        human: Human,
    ) -> ScrivenerResult<Self> {
        let working_dir = working_dir.as_ref().to_path_buf();
        require_dir(&working_dir)?;

        let prompts = match config.prompts().file() {
            Some(file) => {
                let path = working_dir.join(file);
                if !path.is_file() {
                    return Err(ConductorError::new(ConductorErrorKind::MissingFile(
                        path.display().to_string(),
                    ))
                    .into());
                }
                PromptManager::from_file(&path)?
            }
            None => PromptManager::bundled()?,
        };
        let prompts = Arc::new(prompts);

        let mode = genre.creative_mode();
        let actors = config.actors();
        let truncate = *actors.log_truncate();
        let author = Author::new(
            driver.clone(),
            prompts.clone(),
            mode,
            actors.author_preamble().clone(),
        )
        .with_log_truncate(truncate);
        let critic = Critic::new(
            driver.clone(),
            prompts.clone(),
            mode,
            actors.critic_preamble().clone(),
        )
        .with_log_truncate(truncate);
        let editor = Editor::new(driver, prompts, mode, actors.editor_preamble().clone())
            .with_log_truncate(truncate);

        info!(genre = %genre, mode = %mode, "Conductor ready");
        Ok(Self {
            genre,
            working_dir,
            config,
            author,
            critic,
            editor,
            human,
        })
    }

    /// Content genre.
    pub fn genre(&self) -> Genre {
        self.genre
    }

    /// Directory holding the projects.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Effective configuration.
    pub fn config(&self) -> &ScrivenerConfig {
        &self.config
    }

    /// The author.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// The critic.
    pub fn critic(&self) -> &Critic {
        &self.critic
    }

    /// The editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// The human.
    pub fn human(&self) -> &Human {
        &self.human
    }

    /// Stop all four actors.
    pub fn stop(&self) {
        info!("Stopping actors");
        self.author.stop();
        self.critic.stop();
        self.editor.stop();
        self.human.stop();
    }

    /// Whether every actor has stopped.
    pub fn is_stopped(&self) -> bool {
        self.author.is_stopped()
            && self.critic.is_stopped()
            && self.editor.is_stopped()
            && self.human.is_stopped()
    }

    /// Build a concept in a new project directory and return its path.
    ///
    /// Writes `concept.json` before the critique, then `context.json` and
    /// `summary.md` once the concept is final.
    ///
    /// # Errors
    ///
    /// Fails with [`ConductorErrorKind::ProjectExists`] rather than reuse a
    /// directory left by an earlier run in the same second.
    #[instrument(skip(self), fields(genre = %self.genre))]
    pub async fn develop_concept(&self) -> ScrivenerResult<PathBuf> {
        let project_dir = self
            .working_dir
            .join(project_dir_name(&utc_now_compact(), self.genre.as_ref()));
        create_project_dir(&project_dir).await?;
        info!(project_dir = %project_dir.display(), "Developing concept");

        let starter = self.human.get_starter(self.genre.creative_mode())?;
        let ideas = ideate_parallel(
            &self.author,
            &starter.genre,
            &starter.idea,
            starter.num_concepts,
            *self.config.ideation().workers(),
        )
        .await?;
        let selected = self.human.select_idea(&ideas)?;

        let mut context = StoryContext {
            concept: Some(selected),
            ..StoryContext::default()
        };

        info!("Developing plot, themes, characters, world and storyline");
        context.plot = Some(self.author.develop_plot(&context, None).await?);
        context.themes = Some(self.author.develop_themes(&context).await?);
        context.characters = Some(self.author.develop_characters(&context, None).await?);
        context.world = Some(self.author.develop_world(&context, None).await?);
        context.storyline = Some(self.author.develop_storyline(&context, None).await?);
        write_context(&project_dir, CONCEPT_FILE, &context).await?;

        let critique = self.critic.critique_concept(&context).await?;
        if needs_changes(&critique) {
            info!("Revising concept with critique");
            let feedback = Some(critique.as_str());
            context.plot = Some(self.author.develop_plot(&context, feedback).await?);
            context.characters = Some(self.author.develop_characters(&context, feedback).await?);
            context.world = Some(self.author.develop_world(&context, feedback).await?);
            context.storyline = Some(self.author.develop_storyline(&context, feedback).await?);
        } else {
            info!("Critic requested no changes");
        }

        let summary = self.author.summarize_concept(&context).await?;
        write_context(&project_dir, CONTEXT_FILE, &context).await?;
        write_text(&project_dir, SUMMARY_FILE, &summary).await?;

        info!(project_dir = %project_dir.display(), "Concept developed");
        Ok(project_dir)
    }

    /// Review `text` and revise it unless the editor is satisfied.
    pub(crate) async fn editorial_pass(
        &self,
        context: &StoryContext,
        text: String,
    ) -> ScrivenerResult<String> {
        let review = self.editor.review_section(context, &text).await?;
        if needs_changes(&review) {
            self.author.revise_section(context, &text, &review).await
        } else {
            Ok(text)
        }
    }
}
