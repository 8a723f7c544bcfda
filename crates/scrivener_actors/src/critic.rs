//! The critic reviews the developed concept.

use crate::actor::{LlmActor, context_vars, delegate_actor};
use scrivener_core::{CreativeMode, StoryContext};
use scrivener_error::ScrivenerResult;
use scrivener_interface::SharedDriver;
use scrivener_prompts::PromptManager;
use std::sync::Arc;
use tracing::instrument;

/// Identity preamble used when none is configured.
pub const DEFAULT_CRITIC_PREAMBLE: &str =
    "You are a thoughtful and skilled literary critic who likes to help writers improve.";

/// Reply meaning the reviewed work should be kept as is.
pub const NO_CHANGES_NEEDED: &str = "NO CHANGES NEEDED";

/// Whether a critique or review asks for changes.
///
/// A reply that opens with [`NO_CHANGES_NEEDED`], ignoring case and
/// surrounding quotes, asks for none.
///
/// ```
/// use scrivener_actors::needs_changes;
///
/// assert!(!needs_changes("'No changes needed.'"));
/// assert!(needs_changes("Deepen the antagonist."));
/// ```
pub fn needs_changes(feedback: &str) -> bool {
    let normalized = feedback
        .trim_start_matches(|c: char| c == '\'' || c == '"' || c == '*' || c.is_whitespace())
        .to_ascii_uppercase();
    !normalized.starts_with(NO_CHANGES_NEEDED)
}

/// Critiques story concepts.
#[derive(Debug)]
pub struct Critic {
    inner: LlmActor,
}

delegate_actor!(Critic);

impl Critic {
    /// Create a critic.
    pub fn new(
        driver: SharedDriver,
        prompts: Arc<PromptManager>,
        mode: CreativeMode,
        preamble: impl Into<String>,
    ) -> Self {
        Self {
            inner: LlmActor::new("critic", driver, prompts, mode, preamble),
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

    /// Suggest improvements to the concept, or reply [`NO_CHANGES_NEEDED`].
    #[instrument(skip_all)]
    pub async fn critique_concept(&self, context: &StoryContext) -> ScrivenerResult<String> {
        self.inner
            .invoke(
                "critique_concept",
                &[&["CRITIQUE_CONCEPT"]],
                &context_vars(context),
                None,
            )
            .await
    }
}
