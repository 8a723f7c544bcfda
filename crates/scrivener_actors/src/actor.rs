//! Shared actor behavior.

use scrivener_core::{CreativeMode, GenerateRequest, Message, StoryContext, truncate_for_log};
use scrivener_error::{ActorError, ActorErrorKind, ScrivenerResult};
use scrivener_interface::SharedDriver;
use scrivener_prompts::{PromptManager, PromptVars, render};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Characters of prompt and response text kept in debug logs.
pub const DEFAULT_LOG_TRUNCATE: usize = 100;

/// A participant in the pipeline.
pub trait Actor: Send + Sync {
    /// Short role name used in logs and errors.
    fn role(&self) -> &'static str;

    /// Stop the actor. Later calls fail with [`ActorErrorKind::Stopped`].
    fn stop(&self);

    /// Whether [`Actor::stop`] has been called.
    fn is_stopped(&self) -> bool;
}

/// Language-model backed actor.
///
/// Prompts are looked up under the actor's creative mode, rendered, and
/// sent as a user message after a system message holding the identity
/// preamble.
pub struct LlmActor {
    role: &'static str,
    driver: SharedDriver,
    prompts: Arc<PromptManager>,
    mode: CreativeMode,
    preamble: String,
    log_truncate: usize,
    stopped: AtomicBool,
}

impl std::fmt::Debug for LlmActor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmActor")
            .field("role", &self.role)
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("mode", &self.mode)
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

impl LlmActor {
    /// Create an actor for `role`.
    pub fn new(
        role: &'static str,
        driver: SharedDriver,
        prompts: Arc<PromptManager>,
        mode: CreativeMode,
        preamble: impl Into<String>,
    ) -> Self {
        Self {
            role,
            driver,
            prompts,
            mode,
            preamble: preamble.into(),
            log_truncate: DEFAULT_LOG_TRUNCATE,
            stopped: AtomicBool::new(false),
        }
    }

    /// Change how much prompt and response text is logged.
    pub fn with_log_truncate(mut self, limit: usize) -> Self {
        self.log_truncate = limit;
        self
    }

    /// Creative mode selecting the prompt family.
    pub fn mode(&self) -> CreativeMode {
        self.mode
    }

    /// Identity preamble sent as the system message.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Look up each part under the creative mode and join them with newlines.
    pub fn template(&self, parts: &[&[&str]]) -> ScrivenerResult<String> {
        let mut templates = Vec::with_capacity(parts.len());
        for part in parts {
            let mut path = Vec::with_capacity(part.len() + 1);
            path.push(self.mode.as_ref().to_string());
            path.extend(part.iter().map(|segment| segment.to_string()));
            templates.push(self.prompts.get_prompt(path, None)?);
        }
        Ok(templates.join("\n"))
    }

    /// Render the prompt parts and send them to the model.
    pub async fn invoke(
        &self,
        operation: &str,
        parts: &[&[&str]],
        vars: &PromptVars,
        max_tokens: Option<u32>,
    ) -> ScrivenerResult<String> {
        self.ensure_running()?;

        let prompt = render(&self.template(parts)?, vars)?;
        debug!(
            actor = self.role,
            operation,
            prompt = %truncate_for_log(&prompt, self.log_truncate),
            ">>>"
        );

        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system(self.preamble.clone()),
                Message::user(prompt),
            ])
            .max_tokens(max_tokens)
            .build()
            .map_err(|e| ActorError::new(ActorErrorKind::Request(e.to_string())))?;

        let response = self.driver.generate(&request).await?.text();
        debug!(
            actor = self.role,
            operation,
            response = %truncate_for_log(&response, self.log_truncate),
            "<<<"
        );

        if response.trim().is_empty() {
            return Err(ActorError::new(ActorErrorKind::EmptyResponse(self.role.to_string())).into());
        }
        Ok(response)
    }

    fn ensure_running(&self) -> Result<(), ActorError> {
        if self.is_stopped() {
            return Err(ActorError::new(ActorErrorKind::Stopped(self.role.to_string())));
        }
        Ok(())
    }
}

impl Actor for LlmActor {
    fn role(&self) -> &'static str {
        self.role
    }

    fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            debug!(actor = self.role, "Actor stopped");
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Variables for every story context field, unset fields as empty text.
pub(crate) fn context_vars(context: &StoryContext) -> PromptVars {
    PromptVars::new()
        .with("concept", StoryContext::field_or_empty(&context.concept))
        .with("plot", StoryContext::field_or_empty(&context.plot))
        .with("themes", StoryContext::field_or_empty(&context.themes))
        .with("characters", StoryContext::field_or_empty(&context.characters))
        .with("world", StoryContext::field_or_empty(&context.world))
        .with("storyline", StoryContext::field_or_empty(&context.storyline))
}

/// Implements [`Actor`] for a wrapper around an [`LlmActor`] in field `inner`.
macro_rules! delegate_actor {
    ($wrapper:ty) => {
        impl $crate::Actor for $wrapper {
            fn role(&self) -> &'static str {
                $crate::Actor::role(&self.inner)
            }

            fn stop(&self) {
                $crate::Actor::stop(&self.inner)
            }

            fn is_stopped(&self) -> bool {
                $crate::Actor::is_stopped(&self.inner)
            }
        }
    };
}

pub(crate) use delegate_actor;
