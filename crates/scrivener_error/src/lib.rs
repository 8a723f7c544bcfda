//! Error types for the Scrivener writing pipeline.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scrivener_error::{ConfigError, ConfigErrorKind, ScrivenerResult};
//!
//! fn load() -> ScrivenerResult<String> {
//!     Err(ConfigError::new(ConfigErrorKind::FileNotFound("novel.toml".into())))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actor;
mod conductor;
mod config;
mod error;
mod json;
mod models;
mod prompt;

pub use actor::{ActorError, ActorErrorKind};
pub use conductor::{ConductorError, ConductorErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{ScrivenerError, ScrivenerErrorKind, ScrivenerResult};
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind};
pub use prompt::{PromptError, PromptErrorKind};
