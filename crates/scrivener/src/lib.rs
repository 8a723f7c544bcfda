//! Scrivener - a multi-role LLM writing pipeline
//!
//! An author, a critic, an editor and a human collaborate through a chat
//! model to develop a story concept and then draft it in bounded chunks.
//!
//! # Quick Start
//!
//! ```text
//! scrivener longform-fiction ./books -o develop draft
//! scrivener podcast ./episodes -e anthropic -o draft -p 20250101_120000-podcast
//! ```
//!
//! # Architecture
//!
//! - `scrivener_core` - Story context, chat messages, timestamps
//! - `scrivener_interface` - `ScrivenerDriver` trait
//! - `scrivener_error` - Error types
//! - `scrivener_models` - Ollama and Anthropic clients
//! - `scrivener_prompts` - TOML prompt tables and template rendering
//! - `scrivener_actors` - Author, critic, editor and human
//! - `scrivener_conductor` - Develop and draft pipelines
//!
//! This crate holds the command-line interface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;

pub use cli::{Cli, init_tracing, resolve_project, run};
