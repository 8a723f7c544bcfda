//! Ollama client built on `ollama-rs` chat requests.

use crate::OllamaSettings;
use ollama_rs::Ollama;
use ollama_rs::generation::chat::ChatMessage;
use ollama_rs::generation::chat::request::ChatMessageRequest;
use ollama_rs::models::ModelOptions;
use reqwest::{Client, Url};
use scrivener_core::{GenerateRequest, GenerateResponse, Message, Role};
use scrivener_error::{ModelsError, ModelsErrorKind, ScrivenerResult};
use scrivener_interface::ScrivenerDriver;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Ollama LLM client for local model execution.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Ollama,
    settings: OllamaSettings,
}

impl OllamaClient {
    /// Create a client for the configured server and timeout.
    #[instrument(name = "ollama_client_new", skip(settings), fields(model = %settings.model(), url = %settings.base_url()))]
    pub fn new(settings: OllamaSettings) -> ScrivenerResult<Self> {
        let (host, port) = split_base_url(settings.base_url())?;
        let http = Client::builder()
            .timeout(Duration::from_secs(*settings.timeout_secs()))
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::ClientBuild(e.to_string())))?;

        info!(host = %host, port, "Creating Ollama client");
        Ok(Self {
            client: Ollama::new_with_client(host, port, http),
            settings,
        })
    }

    /// Settings this client was built with.
    pub fn settings(&self) -> &OllamaSettings {
        &self.settings
    }

    /// Build the chat request, filling unset sampling values from settings.
    pub(crate) fn convert_request(&self, request: &GenerateRequest) -> ChatMessageRequest {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.settings.model().clone());
        let num_predict = request.max_tokens.unwrap_or(*self.settings.max_tokens());
        let options = ModelOptions::default()
            .temperature(request.temperature.unwrap_or(*self.settings.temperature()))
            .num_predict(i32::try_from(num_predict).unwrap_or(i32::MAX));

        ChatMessageRequest::new(model, request.messages.iter().map(to_chat_message).collect())
            .options(options)
    }
}

/// Split `http://host:port/` into the scheme-and-host and port `ollama-rs` expects.
fn split_base_url(base_url: &str) -> Result<(String, u16), ModelsError> {
    let url = Url::parse(base_url)
        .map_err(|e| ModelsError::new(ModelsErrorKind::InvalidBaseUrl(format!("{base_url}: {e}"))))?;
    let host = url
        .host_str()
        .ok_or_else(|| ModelsError::new(ModelsErrorKind::InvalidBaseUrl(base_url.to_string())))?;
    let port = url
        .port_or_known_default()
        .ok_or_else(|| ModelsError::new(ModelsErrorKind::InvalidBaseUrl(base_url.to_string())))?;
    Ok((format!("{}://{}", url.scheme(), host), port))
}

fn to_chat_message(message: &Message) -> ChatMessage {
    let content = message.content.clone();
    match message.role {
        Role::System => ChatMessage::system(content),
        Role::User => ChatMessage::user(content),
        Role::Assistant => ChatMessage::assistant(content),
    }
}

#[async_trait::async_trait]
impl ScrivenerDriver for OllamaClient {
    #[instrument(skip(self, request), fields(messages = request.messages.len()))]
    async fn generate(&self, request: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        let model = request.model.as_deref().unwrap_or(self.settings.model());
        debug!(model = %model, "Sending chat request to Ollama");

        let response = self
            .client
            .send_chat_messages(self.convert_request(request))
            .await
            .map_err(|e| {
                error!(error = %e, url = %self.settings.base_url(), "Ollama chat request failed");
                ModelsError::new(ModelsErrorKind::Ollama(format!(
                    "{} ({})",
                    e,
                    self.settings.base_url()
                )))
            })?;

        let content = response.message.content;
        debug!(
            response_length = content.len(),
            "Received response from Ollama"
        );
        Ok(GenerateResponse::from_text(content))
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        self.settings.model()
    }
}
