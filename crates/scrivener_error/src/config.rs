//! Configuration loading errors.

/// Why the layered configuration could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration file named on the command line does not exist
    #[display("Configuration file not found: {}", _0)]
    FileNotFound(String),
    /// Defaults, files and environment could not be merged
    #[display("Failed to build configuration: {}", _0)]
    Build(String),
    /// Merged values do not fit the settings structure
    #[display("Failed to parse configuration: {}", _0)]
    Deserialize(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::FileNotFound("novel.toml".to_string()));
/// assert!(err.to_string().contains("novel.toml"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error condition
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
