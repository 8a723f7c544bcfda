//! Anthropic Messages API client.

use crate::AnthropicSettings;
use reqwest::Client;
use scrivener_core::{GenerateRequest, GenerateResponse, Output, Role};
use scrivener_error::{ModelsError, ModelsErrorKind, ScrivenerResult};
use scrivener_interface::ScrivenerDriver;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AnthropicMessage {
    pub(crate) role: &'static str,
    pub(crate) content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AnthropicRequest {
    pub(crate) model: String,
    pub(crate) max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) system: Option<String>,
    pub(crate) messages: Vec<AnthropicMessage>,
    pub(crate) temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum AnthropicContent {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AnthropicResponse {
    pub(crate) id: String,
    pub(crate) content: Vec<AnthropicContent>,
}

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    settings: AnthropicSettings,
}

impl AnthropicClient {
    /// Creates a new Anthropic client with an explicit key.
    pub fn new(api_key: impl Into<String>, settings: AnthropicSettings) -> ScrivenerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*settings.timeout_secs()))
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::ClientBuild(e.to_string())))?;

        debug!(model = %settings.model(), "Creating new Anthropic client");
        Ok(Self {
            client,
            api_key: api_key.into(),
            settings,
        })
    }

    /// Creates a client reading the key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ModelsErrorKind::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env(settings: AnthropicSettings) -> ScrivenerResult<Self> {
        let var = settings.api_key_env().clone();
        match std::env::var(&var) {
            Ok(key) if !key.trim().is_empty() => Self::new(key, settings),
            _ => {
                error!(env_var = %var, "Anthropic API key not set");
                Err(ModelsError::new(ModelsErrorKind::MissingApiKey(var)).into())
            }
        }
    }

    /// Converts a generation request into the Messages API body.
    ///
    /// System messages are lifted into the `system` parameter.
    pub(crate) fn convert_request(
        &self,
        request: &GenerateRequest,
    ) -> Result<AnthropicRequest, ModelsError> {
        let mut system = Vec::new();
        let mut messages = Vec::new();

        for message in &request.messages {
            match message.role {
                Role::System => system.push(message.content.as_str()),
                Role::User => messages.push(AnthropicMessage {
                    role: "user",
                    content: message.content.clone(),
                }),
                Role::Assistant => messages.push(AnthropicMessage {
                    role: "assistant",
                    content: message.content.clone(),
                }),
            }
        }

        if messages.is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::Conversion(
                "Request must contain at least one user or assistant message".to_string(),
            )));
        }

        Ok(AnthropicRequest {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.settings.model().clone()),
            max_tokens: request.max_tokens.unwrap_or(*self.settings.max_tokens()),
            system: (!system.is_empty()).then(|| system.join("\n\n")),
            messages,
            temperature: request.temperature.unwrap_or(*self.settings.temperature()),
        })
    }

    fn convert_response(response: AnthropicResponse) -> GenerateResponse {
        let outputs = response
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicContent::Text { text } => Some(Output::Text(text)),
                AnthropicContent::Other => None,
            })
            .collect();
        GenerateResponse { outputs }
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.settings.base_url().trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl ScrivenerDriver for AnthropicClient {
    #[instrument(skip(self, request), fields(model = %self.settings.model()))]
    async fn generate(&self, request: &GenerateRequest) -> ScrivenerResult<GenerateResponse> {
        let body = self.convert_request(request)?;
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let parsed: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelsError::new(ModelsErrorKind::Parse(e.to_string()))
        })?;

        debug!(response_id = %parsed.id, "Received response from Anthropic");
        Ok(Self::convert_response(parsed))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        self.settings.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivener_core::Message;

    fn client() -> AnthropicClient {
        AnthropicClient::new("test-key", AnthropicSettings::default()).unwrap()
    }

    #[test]
    fn test_system_messages_are_lifted() {
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system("You are an author."),
                Message::user("Write a line."),
            ])
            .build()
            .unwrap();

        let body = client().convert_request(&request).unwrap();

        assert_eq!(body.system.as_deref(), Some("You are an author."));
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.messages[0].role, "user");
        assert_eq!(body.max_tokens, 4096);
    }

    #[test]
    fn test_system_only_request_is_rejected() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::system("Nothing else")])
            .build()
            .unwrap();

        let err = client().convert_request(&request).unwrap_err();
        assert!(matches!(err.kind, ModelsErrorKind::Conversion(_)));
    }

    #[test]
    fn test_request_max_tokens_override() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::user("Hi")])
            .max_tokens(Some(300))
            .build()
            .unwrap();

        let body = client().convert_request(&request).unwrap();
        assert_eq!(body.max_tokens, 300);

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("system").is_none());
    }

    #[test]
    fn test_response_keeps_text_blocks_only() {
        let raw = r#"{
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "Once "},
                {"type": "tool_use", "id": "t", "name": "n", "input": {}},
                {"type": "text", "text": "upon"}
            ]
        }"#;
        let parsed: AnthropicResponse = serde_json::from_str(raw).unwrap();
        let response = AnthropicClient::convert_response(parsed);
        assert_eq!(response.text(), "Once upon");
    }

    #[test]
    fn test_messages_url() {
        assert_eq!(client().messages_url(), "https://api.anthropic.com/v1/messages");
    }
}
