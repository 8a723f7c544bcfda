//! Shared test utilities.

#![allow(dead_code)]

#[path = "../../../scrivener_actors/tests/test_utils/mock_driver.rs"]
mod mock_driver;

pub use mock_driver::{MockBehavior, MockDriver, prompt_of};

use scrivener_actors::Human;
use scrivener_conductor::ScrivenerConfig;
use scrivener_core::{GenerateRequest, Role, StoryContext};
use scrivener_error::ScrivenerResult;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Configuration whose preambles name the actor, so the mock can tell them apart.
pub fn test_config(extra: &str) -> ScrivenerConfig {
    let toml = format!(
        r#"
[ideation]
workers = 2

[actors]
author_preamble = "AUTHOR"
critic_preamble = "CRITIC"
editor_preamble = "EDITOR"

{extra}
"#
    );
    ScrivenerConfig::from_toml_str(&toml).unwrap()
}

/// Human answering from a fixed script.
pub fn scripted_human(answers: &str) -> Human {
    Human::new(Cursor::new(answers.to_string()), std::io::sink())
}

/// System message of a request.
pub fn preamble_of(request: &GenerateRequest) -> &str {
    request
        .messages
        .iter()
        .find(|m| m.role == Role::System)
        .map(|m| m.content.as_str())
        .unwrap_or_default()
}

/// Number following `marker` in `text`, e.g. the 3 in "Write page 3 of 6".
pub fn number_after(text: &str, marker: &str) -> usize {
    text.split(marker)
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// Replies for every actor and step of the bundled prompts.
pub struct Script {
    pub ideas: &'static str,
    pub critique: &'static str,
    pub review: &'static str,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            ideas: r#"["Idea A", "Idea B"]"#,
            critique: "Add a twist.",
            review: "NO CHANGES NEEDED",
        }
    }
}

/// Mock driver that answers each request according to `script`.
pub fn scripted_driver(script: Script) -> Arc<MockDriver> {
    MockDriver::respond(move |request| -> ScrivenerResult<String> {
        let prompt = prompt_of(request);
        let reply = match preamble_of(request) {
            "CRITIC" => script.critique.to_string(),
            "EDITOR" if prompt.starts_with("Summarize") => {
                format!("summary of [{}]", prompt.lines().nth(1).unwrap_or_default())
            }
            "EDITOR" => script.review.to_string(),
            _ if prompt.contains("Brainstorm") => script.ideas.to_string(),
            _ if prompt.contains("Write page") => {
                format!("P{}", number_after(prompt, "Write page"))
            }
            _ if prompt.contains("Write segment") => {
                format!("S{}", number_after(prompt, "Write segment"))
            }
            _ if prompt.contains("You are revising") => "REVISED".to_string(),
            _ if prompt.contains("SUMMARY:") => "# Summary".to_string(),
            _ => "developed text".to_string(),
        };
        Ok(reply)
    })
}

/// Write a developed `context.json` into `dir`.
pub fn write_project(dir: &Path) {
    let context = StoryContext {
        concept: Some("A lighthouse keeper finds a map".to_string()),
        plot: Some("plot".to_string()),
        characters: Some("characters".to_string()),
        storyline: Some("storyline".to_string()),
        world: Some("world".to_string()),
        themes: Some("themes".to_string()),
    };
    std::fs::write(dir.join("context.json"), context.to_json().unwrap()).unwrap();
}
