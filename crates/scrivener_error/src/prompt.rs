//! Prompt lookup and rendering error types.

/// Specific error conditions for prompt operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PromptErrorKind {
    /// Failed to read the prompt file
    #[display("Failed to read prompt file: {}", _0)]
    FileRead(String),
    /// Failed to parse TOML content
    #[display("Failed to parse TOML: {}", _0)]
    TomlParse(String),
    /// Lookup path had no segments
    #[display("Prompt path cannot be empty")]
    EmptyPath,
    /// A segment of the path does not exist
    #[display("No prompt found for path: {}", _0)]
    NotFound(String),
    /// The path resolved to a value that is not a table of variants
    #[display("Prompt path must end with a table node: {}", _0)]
    NotATable(String),
    /// The requested variant is missing from the table
    #[display("No prompt found for prompt {} variant: '{}'", path, variant)]
    VariantNotFound {
        /// Dotted prompt path
        path: String,
        /// Requested variant
        variant: String,
    },
    /// The variant exists but is not a string
    #[display("Prompt {} variant '{}' is not a string", path, variant)]
    NotAString {
        /// Dotted prompt path
        path: String,
        /// Requested variant
        variant: String,
    },
    /// Placeholder pattern could not be compiled
    #[display("Invalid template pattern: {}", _0)]
    InvalidTemplate(String),
    /// Template references a placeholder that has no value
    #[display("Template placeholder '{{{{{}}}}}' has no value", _0)]
    MissingVariable(String),
}

/// Error type for prompt operations.
///
/// # Examples
///
/// ```
/// use scrivener_error::{PromptError, PromptErrorKind};
///
/// let err = PromptError::new(PromptErrorKind::NotFound("AUTHOR.IDEATE".to_string()));
/// assert!(format!("{}", err).contains("AUTHOR.IDEATE"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at line {} in {}", kind, line, file)]
pub struct PromptError {
    /// The specific error condition
    pub kind: PromptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PromptError {
    /// Create a new PromptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PromptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
