//! `{{name}}` placeholder rendering.

use regex::{Captures, Regex};
use scrivener_error::{PromptError, PromptErrorKind};
use std::collections::HashMap;
use std::sync::LazyLock;

/// `{{name}}` or `{{ name }}`, compiled once per process.
static PLACEHOLDER: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}"));

/// Values substituted into a prompt template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptVars(HashMap<String, String>);

impl PromptVars {
    /// Empty variable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    /// Value for a variable, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Replace every `{{name}}` in `template` with its value.
///
/// Substituted values are not scanned again, so model output containing
/// braces passes through untouched.
///
/// # Errors
///
/// Returns [`PromptErrorKind::MissingVariable`] for the first placeholder
/// without a value.
pub fn render(template: &str, vars: &PromptVars) -> Result<String, PromptError> {
    let re = PLACEHOLDER
        .as_ref()
        .map_err(|e| PromptError::new(PromptErrorKind::InvalidTemplate(e.to_string())))?;

    if let Some(missing) = re
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .find(|name| vars.get(name).is_none())
    {
        return Err(PromptError::new(PromptErrorKind::MissingVariable(missing)));
    }

    let rendered = re.replace_all(template, |cap: &Captures| {
        vars.get(&cap[1]).unwrap_or_default().to_string()
    });
    Ok(rendered.into_owned())
}
