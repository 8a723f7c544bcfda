//! Provider settings, deserialized from the `[llm]` configuration table.

use crate::LlmEnvironment;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Settings for a local Ollama server.
///
/// # Example
///
/// ```toml
/// [llm.local]
/// model = "llama3.2"
/// temperature = 0.8
/// max_tokens = 2048
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct OllamaSettings {
    /// Model tag served by Ollama
    #[serde(default = "default_ollama_model")]
    model: String,

    /// Server address
    #[serde(default = "default_ollama_url")]
    base_url: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Upper bound on generated tokens (`num_predict`)
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_local_timeout")]
    timeout_secs: u64,
}

fn default_ollama_model() -> String {
    "llama3.2".to_string()
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_temperature() -> f32 {
    0.8
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_local_timeout() -> u64 {
    600
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            model: default_ollama_model(),
            base_url: default_ollama_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_local_timeout(),
        }
    }
}

impl OllamaSettings {
    /// Override the model tag.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the server address.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Settings for the hosted Anthropic Messages API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnthropicSettings {
    /// Model identifier
    #[serde(default = "default_anthropic_model")]
    model: String,

    /// API root, without the `/messages` suffix
    #[serde(default = "default_anthropic_url")]
    base_url: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    api_key_env: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Upper bound on generated tokens
    #[serde(default = "default_anthropic_max_tokens")]
    max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_remote_timeout")]
    timeout_secs: u64,
}

fn default_anthropic_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}

fn default_anthropic_url() -> String {
    "https://api.anthropic.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

fn default_anthropic_max_tokens() -> u32 {
    4096
}

fn default_remote_timeout() -> u64 {
    120
}

impl Default for AnthropicSettings {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            base_url: default_anthropic_url(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            max_tokens: default_anthropic_max_tokens(),
            timeout_secs: default_remote_timeout(),
        }
    }
}

/// The `[llm]` configuration table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct LlmConfig {
    /// Environment used when the command line does not pick one
    #[serde(default)]
    environment: LlmEnvironment,

    /// Local Ollama settings
    #[serde(default)]
    local: OllamaSettings,

    /// Anthropic settings
    #[serde(default)]
    anthropic: AnthropicSettings,
}
