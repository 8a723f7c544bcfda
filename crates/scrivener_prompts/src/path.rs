//! Lookup paths into the prompt table.

/// Sequence of table keys leading to a prompt.
///
/// Built from a dotted string (`"AUTHOR.DEVELOP_PLOT.BASE"`) or from
/// explicit segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PromptPath(Vec<String>);

impl PromptPath {
    /// Path segments in lookup order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True when there is nothing to look up.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|segment| segment.is_empty())
    }

    /// Dotted form used in error messages.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl std::fmt::Display for PromptPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl From<&str> for PromptPath {
    fn from(path: &str) -> Self {
        if path.is_empty() {
            return Self::default();
        }
        Self(path.split('.').map(str::to_string).collect())
    }
}

impl From<String> for PromptPath {
    fn from(path: String) -> Self {
        Self::from(path.as_str())
    }
}

impl From<Vec<String>> for PromptPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for PromptPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PromptPath {
    fn from(segments: [&str; N]) -> Self {
        Self::from(&segments[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_and_segment_forms_match() {
        let dotted = PromptPath::from("AUTHOR.DEVELOP_PLOT.BASE");
        let listed = PromptPath::from(["AUTHOR", "DEVELOP_PLOT", "BASE"]);
        assert_eq!(dotted, listed);
        assert_eq!(listed.to_string(), "AUTHOR.DEVELOP_PLOT.BASE");
    }

    #[test]
    fn test_empty_forms() {
        assert!(PromptPath::from("").is_empty());
        assert!(PromptPath::from(Vec::<String>::new()).is_empty());
        assert!(!PromptPath::from("AUTHOR").is_empty());
    }
}
