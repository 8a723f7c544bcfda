//! Shared test utilities.

#![allow(dead_code)]

mod mock_driver;

pub use mock_driver::{MockBehavior, MockDriver, prompt_of};

use scrivener_core::StoryContext;

/// A fully developed context for tests.
pub fn sample_context() -> StoryContext {
    StoryContext {
        concept: Some("A story about a magical library".to_string()),
        plot: Some("The library contains books that come to life".to_string()),
        characters: Some("Librarian Sarah, Living Books".to_string()),
        storyline: Some("Sarah discovers the library's secret".to_string()),
        world: Some("Modern day with magical elements".to_string()),
        themes: Some("Magic, Knowledge, Adventure".to_string()),
    }
}
