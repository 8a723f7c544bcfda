//! Top-level error wrapper types.

use crate::{
    ActorError, ConductorError, ConfigError, JsonError, ModelsError, PromptError,
};

/// The foundation error enum; every crate-specific error converts into it.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ModelsError, ModelsErrorKind, ScrivenerError, ScrivenerErrorKind};
///
/// let err: ScrivenerError = ModelsError::new(ModelsErrorKind::Http("refused".into())).into();
/// assert!(matches!(err.kind(), ScrivenerErrorKind::Models(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivenerErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Prompt lookup or rendering error
    #[from(PromptError)]
    Prompt(PromptError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Actor error
    #[from(ActorError)]
    Actor(ActorError),
    /// Pipeline orchestration error
    #[from(ConductorError)]
    Conductor(ConductorError),
}

/// Scrivener error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivener Error: {}", _0)]
pub struct ScrivenerError(Box<ScrivenerErrorKind>);

impl ScrivenerError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivenerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivenerErrorKind {
        &self.0
    }
}

impl<T> From<T> for ScrivenerError
where
    T: Into<ScrivenerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivener operations.
pub type ScrivenerResult<T> = std::result::Result<T, ScrivenerError>;
