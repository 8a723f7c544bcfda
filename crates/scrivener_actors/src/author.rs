//! The author drafts and develops the story.

use crate::actor::{LlmActor, context_vars, delegate_actor};
use crate::{IDEA_LIST_FORMAT_INSTRUCTIONS, parse_idea_list};
use scrivener_core::{CreativeMode, StoryContext};
use scrivener_error::ScrivenerResult;
use scrivener_interface::SharedDriver;
use scrivener_prompts::{PromptManager, PromptVars};
use std::sync::Arc;
use tracing::instrument;

/// Identity preamble used when none is configured.
pub const DEFAULT_AUTHOR_PREAMBLE: &str = "You are a thoughtful and skilled fiction writer.";

/// Develops concepts and writes the draft.
#[derive(Debug)]
pub struct Author {
    inner: LlmActor,
}

delegate_actor!(Author);

/// Prompt parts for a develop step with an optional critique.
fn develop_parts(step: &'static str, critique: Option<&str>) -> [[&'static str; 2]; 2] {
    let second = if critique.is_some() {
        "WITH_FEEDBACK"
    } else {
        "UNASSISTED"
    };
    [[step, "BASE"], [step, second]]
}

impl Author {
    /// Create an author.
    pub fn new(
        driver: SharedDriver,
        prompts: Arc<PromptManager>,
        mode: CreativeMode,
        preamble: impl Into<String>,
    ) -> Self {
        Self {
            inner: LlmActor::new("author", driver, prompts, mode, preamble),
        }
    }

    /// Change how much prompt and response text is logged.
    pub fn with_log_truncate(mut self, limit: usize) -> Self {
        self.inner = self.inner.with_log_truncate(limit);
        self
    }

    /// Underlying model actor.
    pub fn actor(&self) -> &LlmActor {
        &self.inner
    }

    /// Brainstorm concepts in `genre` from a starter idea.
    ///
    /// Returns the ideas parsed from the model's JSON list.
    #[instrument(skip(self, starter), fields(mode = %self.inner.mode()))]
    pub async fn ideate(&self, genre: &str, starter: &str) -> ScrivenerResult<Vec<String>> {
        let vars = PromptVars::new()
            .with("genre", genre)
            .with("starter", starter)
            .with("format_instructions", IDEA_LIST_FORMAT_INSTRUCTIONS);
        let response = self
            .inner
            .invoke("ideate", &[&["IDEATE"]], &vars, None)
            .await?;
        Ok(parse_idea_list(&response))
    }

    async fn develop(
        &self,
        operation: &str,
        step: &'static str,
        context: &StoryContext,
        critique: Option<&str>,
    ) -> ScrivenerResult<String> {
        let [base, variant] = develop_parts(step, critique);
        let mut vars = context_vars(context);
        vars.insert("feedback", critique.unwrap_or_default());
        self.inner
            .invoke(operation, &[&base, &variant], &vars, None)
            .await
    }

    /// Outline the plot, or rework it with a critique.
    #[instrument(skip_all, fields(with_feedback = critique.is_some()))]
    pub async fn develop_plot(
        &self,
        context: &StoryContext,
        critique: Option<&str>,
    ) -> ScrivenerResult<String> {
        self.develop("develop_plot", "DEVELOP_PLOT", context, critique)
            .await
    }

    /// Name the themes the story examines.
    #[instrument(skip_all)]
    pub async fn develop_themes(&self, context: &StoryContext) -> ScrivenerResult<String> {
        self.inner
            .invoke(
                "develop_themes",
                &[&["DEVELOP_THEME", "UNASSISTED"]],
                &context_vars(context),
                None,
            )
            .await
    }

    /// Define the characters, or rework them with a critique.
    #[instrument(skip_all, fields(with_feedback = critique.is_some()))]
    pub async fn develop_characters(
        &self,
        context: &StoryContext,
        critique: Option<&str>,
    ) -> ScrivenerResult<String> {
        self.develop("develop_characters", "DEVELOP_CHARACTERS", context, critique)
            .await
    }

    /// Describe the world, or rework it with a critique.
    #[instrument(skip_all, fields(with_feedback = critique.is_some()))]
    pub async fn develop_world(
        &self,
        context: &StoryContext,
        critique: Option<&str>,
    ) -> ScrivenerResult<String> {
        self.develop("develop_world", "DEVELOP_WORLD", context, critique)
            .await
    }

    /// Lay out the storyline, or rework it with a critique.
    #[instrument(skip_all, fields(with_feedback = critique.is_some()))]
    pub async fn develop_storyline(
        &self,
        context: &StoryContext,
        critique: Option<&str>,
    ) -> ScrivenerResult<String> {
        self.develop("develop_storyline", "DEVELOP_STORYLINE", context, critique)
            .await
    }

    /// Summarize the developed concept.
    #[instrument(skip_all)]
    pub async fn summarize_concept(&self, context: &StoryContext) -> ScrivenerResult<String> {
        self.inner
            .invoke(
                "summarize_concept",
                &[&["SUMMARIZE_CONCEPT"]],
                &context_vars(context),
                None,
            )
            .await
    }

    /// Write one section of the draft.
    ///
    /// `preceding_sections` is the text that comes right before this section
    /// and `extended_context` holds summaries of earlier parts. The response
    /// length is capped at roughly twice `num_words` tokens.
    #[instrument(skip(self, context, preceding_sections, extended_context))]
    pub async fn write_section(
        &self,
        context: &StoryContext,
        num_words: u32,
        section_number: usize,
        total_sections: usize,
        preceding_sections: &str,
        extended_context: &str,
    ) -> ScrivenerResult<String> {
        let vars = context_vars(context)
            .with("num_words", num_words)
            .with("section_number", section_number)
            .with("total_sections", total_sections)
            .with("preceding_sections", preceding_sections)
            .with("extended_context", extended_context);
        self.inner
            .invoke(
                "write_section",
                &[&["DRAFT", "SECTION"]],
                &vars,
                Some(num_words.saturating_mul(2)),
            )
            .await
    }

    /// Rewrite a section to address editorial feedback.
    #[instrument(skip_all)]
    pub async fn revise_section(
        &self,
        context: &StoryContext,
        text: &str,
        feedback: &str,
    ) -> ScrivenerResult<String> {
        let vars = context_vars(context)
            .with("text", text)
            .with("feedback", feedback);
        self.inner
            .invoke("revise_section", &[&["DRAFT", "REVISE"]], &vars, None)
            .await
    }
}
