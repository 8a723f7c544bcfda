//! Trait definitions for language-model backends.

use async_trait::async_trait;
use scrivener_core::{GenerateRequest, GenerateResponse};
use scrivener_error::ScrivenerResult;
use std::sync::Arc;

/// Core trait that all language-model backends must implement.
#[async_trait]
pub trait ScrivenerDriver: Send + Sync {
    /// Generate model output for a chat request.
    async fn generate(&self, req: &GenerateRequest) -> ScrivenerResult<GenerateResponse>;

    /// Provider name (e.g., "ollama", "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3.2").
    fn model_name(&self) -> &str;
}

/// Driver handle shared between actors.
pub type SharedDriver = Arc<dyn ScrivenerDriver>;

