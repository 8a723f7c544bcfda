//! Prompt table loading and lookup.

use crate::PromptPath;
use scrivener_error::{PromptError, PromptErrorKind};
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, instrument};

/// Variant used when none is requested.
pub const DEFAULT_VARIANT: &str = "DEFAULT";

const BUNDLED_PROMPTS: &str = include_str!("../prompts.toml");

/// Nested table of prompt templates.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptManager {
    prompts: Table,
}

impl PromptManager {
    /// Load prompts from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PromptError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::new(PromptErrorKind::FileRead(format!("{}: {}", path.display(), e)))
        })?;
        let manager = Self::from_toml_str(&content)?;
        debug!(top_level = manager.prompts.len(), "Loaded prompt file");
        Ok(manager)
    }

    /// Parse prompts from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, PromptError> {
        let prompts = content
            .parse::<Table>()
            .map_err(|e| PromptError::new(PromptErrorKind::TomlParse(e.to_string())))?;
        Ok(Self { prompts })
    }

    /// Prompts shipped with the crate.
    pub fn bundled() -> Result<Self, PromptError> {
        Self::from_toml_str(BUNDLED_PROMPTS)
    }

    /// Look up a prompt template.
    ///
    /// `variant` of `None` selects [`DEFAULT_VARIANT`]. A named variant that
    /// is missing is an error; there is no fallback to the default.
    ///
    /// # Errors
    ///
    /// Fails when the path is empty, a segment is missing, the path ends on
    /// something other than a table, or the variant is absent.
    pub fn get_prompt(
        &self,
        path: impl Into<PromptPath>,
        variant: Option<&str>,
    ) -> Result<&str, PromptError> {
        let path = path.into();
        if path.is_empty() {
            return Err(PromptError::new(PromptErrorKind::EmptyPath));
        }

        let mut table = &self.prompts;
        let mut node: Option<&Value> = None;
        for segment in path.segments() {
            if let Some(current) = node {
                table = match current {
                    Value::Table(inner) => inner,
                    _ => return Err(PromptError::new(PromptErrorKind::NotFound(path.dotted()))),
                };
            }
            node = Some(
                table
                    .get(segment)
                    .ok_or_else(|| PromptError::new(PromptErrorKind::NotFound(path.dotted())))?,
            );
        }

        let leaf = match node {
            Some(Value::Table(leaf)) => leaf,
            _ => return Err(PromptError::new(PromptErrorKind::NotATable(path.dotted()))),
        };

        let variant = variant.unwrap_or(DEFAULT_VARIANT);
        match leaf.get(variant) {
            Some(Value::String(prompt)) => Ok(prompt),
            Some(_) => Err(PromptError::new(PromptErrorKind::NotAString {
                path: path.dotted(),
                variant: variant.to_string(),
            })),
            None => Err(PromptError::new(PromptErrorKind::VariantNotFound {
                path: path.dotted(),
                variant: variant.to_string(),
            })),
        }
    }
}
