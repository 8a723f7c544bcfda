//! Conductor (pipeline orchestration) error types.

/// Specific error conditions for pipeline orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConductorErrorKind {
    /// A required directory does not exist
    #[display("Directory does not exist: {}", _0)]
    MissingDirectory(String),
    /// A required file does not exist
    #[display("File does not exist: {}", _0)]
    MissingFile(String),
    /// A new project would overwrite an existing one
    #[display("Project directory already exists: {}", _0)]
    ProjectExists(String),
    /// Failed to create a directory
    #[display("Failed to create directory {}: {}", path, message)]
    DirectoryCreation {
        /// Directory path
        path: String,
        /// Underlying error message
        message: String,
    },
    /// Failed to write an output file
    #[display("Failed to write {}: {}", path, message)]
    FileWrite {
        /// File path
        path: String,
        /// Underlying error message
        message: String,
    },
    /// Failed to read an input file
    #[display("Failed to read {}: {}", path, message)]
    FileRead {
        /// File path
        path: String,
        /// Underlying error message
        message: String,
    },
    /// Ideation produced no usable concepts
    #[display("Ideation produced no concepts")]
    NoIdeas,
    /// An ideation worker failed to complete
    #[display("Ideation worker failed: {}", _0)]
    Worker(String),
    /// Drafting was requested without a project directory
    #[display("No project directory available for drafting")]
    MissingProject,
}

/// Conductor error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Conductor Error: {} at line {} in {}", kind, line, file)]
pub struct ConductorError {
    /// The specific error condition
    pub kind: ConductorErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConductorError {
    /// Create a new ConductorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConductorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
