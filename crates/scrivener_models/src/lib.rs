//! Language-model provider integrations for Scrivener.
//!
//! # Available Providers
//!
//! - **Ollama** - local models through `ollama-rs` chat requests
//! - **Anthropic** - hosted Claude models over the Messages API
//!
//! ```no_run
//! use scrivener_models::{LlmConfig, LlmEnvironment, build_driver};
//! use scrivener_core::{GenerateRequest, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = build_driver(LlmEnvironment::Local, &LlmConfig::default())?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Name three dragons.")])
//!     .build()?;
//! let response = driver.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod environment;
mod ollama;
mod settings;

pub use anthropic::AnthropicClient;
pub use environment::{LlmEnvironment, build_driver};
pub use ollama::OllamaClient;
pub use settings::{AnthropicSettings, LlmConfig, OllamaSettings};
