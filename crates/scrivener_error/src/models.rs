//! Model provider errors.

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// HTTP client for a provider could not be constructed
    #[display("Failed to build HTTP client: {}", _0)]
    ClientBuild(String),
    /// Request could not be sent or the connection failed
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Provider returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Ollama server rejected the request or could not be reached
    #[display("Ollama error: {}", _0)]
    Ollama(String),
    /// Configured server address is not a valid URL
    #[display("Invalid base URL: {}", _0)]
    InvalidBaseUrl(String),
    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    Parse(String),
    /// Required API key is not present in the environment
    #[display("API key not configured (expected in ${})", _0)]
    MissingApiKey(String),
    /// Request could not be converted for the provider
    #[display("Conversion error: {}", _0)]
    Conversion(String),
    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
