//! Selection of the model backend.

use crate::{AnthropicClient, LlmConfig, OllamaClient};
use scrivener_error::ScrivenerResult;
use scrivener_interface::SharedDriver;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// Where model calls are served from.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LlmEnvironment {
    /// Ollama on the local machine
    #[default]
    Local,
    /// Hosted Anthropic models
    Anthropic,
}

/// Build the driver for an environment.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or, for hosted
/// environments, the API key is not set.
#[instrument(skip(config))]
pub fn build_driver(environment: LlmEnvironment, config: &LlmConfig) -> ScrivenerResult<SharedDriver> {
    let driver: SharedDriver = match environment {
        LlmEnvironment::Local => Arc::new(OllamaClient::new(config.local().clone())?),
        LlmEnvironment::Anthropic => Arc::new(AnthropicClient::from_env(config.anthropic().clone())?),
    };
    info!(
        provider = driver.provider_name(),
        model = driver.model_name(),
        "Model driver ready"
    );
    Ok(driver)
}
