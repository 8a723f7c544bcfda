//! Core data types for the Scrivener writing pipeline.
//!
//! This crate provides the story record threaded through every pipeline stage,
//! the creative modes that select prompt variants, and the chat request types
//! shared by every model driver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod message;
mod mode;
mod request;
mod text;
mod time;

pub use context::StoryContext;
pub use message::{Message, Role};
pub use mode::{CreativeMode, Genre};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse, Output};
pub use text::truncate_for_log;
pub use time::{utc_as_string, utc_now_compact};
