//! Story context (de)serialization errors.

use std::fmt;

/// A story context document could not be written or parsed.
///
/// # Examples
///
/// ```
/// use scrivener_error::JsonError;
///
/// let err = JsonError::new("expected value at line 1").in_document("novel/context.json");
/// assert_eq!(err.document.as_deref(), Some("novel/context.json"));
/// assert!(err.to_string().contains("novel/context.json"));
/// ```
#[derive(Debug, Clone, derive_more::Error)]
pub struct JsonError {
    /// Checkpoint file the document came from, when it came from disk
    pub document: Option<String>,
    /// What serde_json reported
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create an error for an in-memory document.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: None,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Name the file the document was read from.
    pub fn in_document(mut self, path: impl Into<String>) -> Self {
        self.document = Some(path.into());
        self
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.document {
            Some(document) => write!(f, "JSON Error in {}: {}", document, self.message)?,
            None => write!(f, "JSON Error: {}", self.message)?,
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}
