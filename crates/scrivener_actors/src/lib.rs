//! Actors of the writing pipeline.
//!
//! Each actor plays one role. The [`Author`], [`Critic`] and [`Editor`] are
//! backed by a language model through [`LlmActor`]; the [`Human`] reads
//! answers from a terminal (or any reader and writer pair).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actor;
mod author;
mod critic;
mod editor;
mod human;
mod ideas;

pub use actor::{Actor, DEFAULT_LOG_TRUNCATE, LlmActor};
pub use author::{Author, DEFAULT_AUTHOR_PREAMBLE};
pub use critic::{Critic, DEFAULT_CRITIC_PREAMBLE, NO_CHANGES_NEEDED, needs_changes};
pub use editor::{DEFAULT_EDITOR_PREAMBLE, Editor};
pub use human::{Human, Starter};
pub use ideas::{IDEA_LIST_FORMAT_INSTRUCTIONS, parse_idea_list};
