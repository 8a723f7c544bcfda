//! The story record built up by the develop pipeline.

use scrivener_error::JsonError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat record of the story concept.
///
/// Every field is optional freeform text. The conductor owns a single
/// instance and lends it mutably to each pipeline stage in turn.
///
/// # Examples
///
/// ```
/// use scrivener_core::StoryContext;
///
/// let mut context = StoryContext::default();
/// context.concept = Some("Two puppies in love".to_string());
///
/// let json = context.to_json().unwrap();
/// let restored = StoryContext::from_json(&json).unwrap();
/// assert_eq!(restored, context);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryContext {
    /// The selected story idea
    pub concept: Option<String>,
    /// Plot outline
    pub plot: Option<String>,
    /// Character definitions
    pub characters: Option<String>,
    /// Beat-by-beat storyline
    pub storyline: Option<String>,
    /// Setting and world building
    pub world: Option<String>,
    /// Literary themes explored
    pub themes: Option<String>,
}

impl StoryContext {
    /// Marshal the full field set to a JSON object.
    ///
    /// Unset fields are written as `null` so every snapshot carries all six keys.
    pub fn to_json(&self) -> Result<String, JsonError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize story context: {}", e)))
    }

    /// Restore a context from its JSON form.
    ///
    /// Missing keys and `null` values both come back as `None`. The error
    /// carries no document name; callers reading from disk attach one with
    /// [`JsonError::in_document`].
    pub fn from_json(json: &str) -> Result<Self, JsonError> {
        serde_json::from_str(json)
            .map_err(|e| JsonError::new(format!("Failed to parse story context: {}", e)))
    }

    /// Field value or empty text, for prompt interpolation.
    pub fn field_or_empty(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for StoryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StoryContext:")?;
        writeln!(f, "\tconcept: {}", Self::field_or_empty(&self.concept))?;
        writeln!(f, "\tplot: {}", Self::field_or_empty(&self.plot))?;
        writeln!(f, "\tthemes: {}", Self::field_or_empty(&self.themes))?;
        writeln!(f, "\tcharacters: {}", Self::field_or_empty(&self.characters))?;
        writeln!(f, "\tworld: {}", Self::field_or_empty(&self.world))?;
        write!(f, "\tstoryline: {}", Self::field_or_empty(&self.storyline))
    }
}
