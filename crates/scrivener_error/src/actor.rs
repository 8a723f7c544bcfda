//! Actor error types.

/// Specific error conditions raised by actors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ActorErrorKind {
    /// Actor was used after `stop()`
    #[display("{} actor has been stopped", _0)]
    Stopped(String),
    /// The model returned no text
    #[display("{} actor received an empty response", _0)]
    EmptyResponse(String),
    /// Human input was expected to be a number
    #[display("Expected a number, got '{}'", _0)]
    InvalidNumber(String),
    /// Human selected an option outside the offered range
    #[display("Selection {} is out of range (1-{})", selection, options)]
    SelectionOutOfRange {
        /// Selection as typed by the user
        selection: usize,
        /// Number of options offered
        options: usize,
    },
    /// Nothing was offered to choose from
    #[display("No options to choose from")]
    NoOptions,
    /// Reading from or writing to the terminal failed
    #[display("Terminal I/O failed: {}", _0)]
    Io(String),
    /// Input stream closed before an answer was read
    #[display("Input closed while waiting for an answer")]
    InputClosed,
    /// Failed to build a model request
    #[display("Failed to build request: {}", _0)]
    Request(String),
}

/// Actor error with location tracking.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ActorError, ActorErrorKind};
///
/// let err = ActorError::new(ActorErrorKind::InvalidNumber("three".to_string()));
/// assert!(format!("{}", err).contains("three"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Actor Error: {} at line {} in {}", kind, line, file)]
pub struct ActorError {
    /// The specific error condition
    pub kind: ActorErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ActorError {
    /// Create a new ActorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ActorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
