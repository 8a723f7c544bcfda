//! The editor keeps running summaries and reviews drafted sections.

use crate::actor::{LlmActor, context_vars, delegate_actor};
use scrivener_core::{CreativeMode, StoryContext};
use scrivener_error::ScrivenerResult;
use scrivener_interface::SharedDriver;
use scrivener_prompts::{PromptManager, PromptVars};
use std::sync::Arc;
use tracing::instrument;

/// Identity preamble used when none is configured.
pub const DEFAULT_EDITOR_PREAMBLE: &str =
    "You are a skilled editor who helps writers refine their work.";

/// Summarizes and reviews drafted text.
#[derive(Debug)]
pub struct Editor {
    inner: LlmActor,
}

delegate_actor!(Editor);

impl Editor {
    /// Create an editor.
    pub fn new(
        driver: SharedDriver,
        prompts: Arc<PromptManager>,
        mode: CreativeMode,
        preamble: impl Into<String>,
    ) -> Self {
        Self {
            inner: LlmActor::new("editor", driver, prompts, mode, preamble),
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

    /// Condense a finished chapter or segment for later sections.
    #[instrument(skip_all, fields(text_length = text.len()))]
    pub async fn summarize_section(&self, text: &str) -> ScrivenerResult<String> {
        let vars = PromptVars::new().with("text", text);
        self.inner
            .invoke(
                "summarize_section",
                &[&["EDIT", "SUMMARIZE_SECTION"]],
                &vars,
                None,
            )
            .await
    }

    /// Review a section against the concept.
    #[instrument(skip_all, fields(text_length = text.len()))]
    pub async fn review_section(
        &self,
        context: &StoryContext,
        text: &str,
    ) -> ScrivenerResult<String> {
        let vars = context_vars(context).with("text", text);
        self.inner
            .invoke("review_section", &[&["EDIT", "REVIEW_SECTION"]], &vars, None)
            .await
    }
}
