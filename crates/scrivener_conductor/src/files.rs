//! Checkpoint files.

use scrivener_core::StoryContext;
use scrivener_error::{ConductorError, ConductorErrorKind, ScrivenerResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Context snapshot written before the critique.
pub const CONCEPT_FILE: &str = "concept.json";
/// Final context after revision.
pub const CONTEXT_FILE: &str = "context.json";
/// Markdown summary of the concept.
pub const SUMMARY_FILE: &str = "summary.md";

/// Name of a project directory: `<timestamp>-<label>` with spaces as `_`.
pub fn project_dir_name(timestamp: &str, label: &str) -> String {
    format!("{}-{}", timestamp, label).replace(' ', "_")
}

/// File name of the `number`-th chapter.
pub fn chapter_file_name(number: usize) -> String {
    format!("chapter_{:02}.txt", number)
}

/// File name of the `number`-th podcast segment.
pub fn segment_file_name(number: usize) -> String {
    format!("segment_{:02}.txt", number)
}

pub(crate) fn require_dir(path: &Path) -> Result<(), ConductorError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ConductorError::new(ConductorErrorKind::MissingDirectory(
            path.display().to_string(),
        )))
    }
}

/// Create a fresh project directory. An existing one is never reused.
pub(crate) async fn create_project_dir(path: &Path) -> ScrivenerResult<()> {
    tokio::fs::create_dir(path).await.map_err(|e| {
        let path = path.display().to_string();
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            ConductorError::new(ConductorErrorKind::ProjectExists(path))
        } else {
            ConductorError::new(ConductorErrorKind::DirectoryCreation {
                path,
                message: e.to_string(),
            })
        }
    })?;
    Ok(())
}

pub(crate) async fn write_text(dir: &Path, name: &str, content: &str) -> ScrivenerResult<PathBuf> {
    let path = dir.join(name);
    tokio::fs::write(&path, content).await.map_err(|e| {
        ConductorError::new(ConductorErrorKind::FileWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Wrote checkpoint");
    Ok(path)
}

pub(crate) async fn write_context(
    dir: &Path,
    name: &str,
    context: &StoryContext,
) -> ScrivenerResult<PathBuf> {
    write_text(dir, name, &context.to_json()?).await
}

pub(crate) async fn read_context(dir: &Path) -> ScrivenerResult<StoryContext> {
    let path = dir.join(CONTEXT_FILE);
    let json = tokio::fs::read_to_string(&path).await.map_err(|e| {
        ConductorError::new(ConductorErrorKind::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    let context = StoryContext::from_json(&json)
        .map_err(|e| e.in_document(path.display().to_string()))?;
    Ok(context)
}

/// Last `window` items joined with `separator`.
pub(crate) fn tail(items: &[String], window: usize, separator: &str) -> String {
    let start = items.len().saturating_sub(window);
    items[start..].join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_dir_name_replaces_spaces() {
        assert_eq!(
            project_dir_name("20240102_030405", "dark fantasy"),
            "20240102_030405-dark_fantasy"
        );
    }

    #[test]
    fn test_numbered_file_names() {
        assert_eq!(chapter_file_name(1), "chapter_01.txt");
        assert_eq!(chapter_file_name(12), "chapter_12.txt");
        assert_eq!(segment_file_name(3), "segment_03.txt");
        assert_eq!(segment_file_name(100), "segment_100.txt");
    }

    #[tokio::test]
    async fn test_project_dir_is_never_reused() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join(project_dir_name("20240102_030405", "podcast"));

        create_project_dir(&project).await.unwrap();
        std::fs::write(project.join(CONTEXT_FILE), "{}").unwrap();

        let err = create_project_dir(&project).await.unwrap_err();
        assert!(matches!(
            err.kind(),
            scrivener_error::ScrivenerErrorKind::Conductor(e)
                if matches!(e.kind, ConductorErrorKind::ProjectExists(_))
        ));
        assert_eq!(std::fs::read_to_string(project.join(CONTEXT_FILE)).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_bad_context_names_its_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONTEXT_FILE), "{\"concept\": ").unwrap();

        let err = read_context(dir.path()).await.unwrap_err();
        let scrivener_error::ScrivenerErrorKind::Json(e) = err.kind() else {
            panic!("expected a JSON error, got {err}");
        };
        let expected = dir.path().join(CONTEXT_FILE).display().to_string();
        assert_eq!(e.document.as_deref(), Some(expected.as_str()));
        assert!(err.to_string().contains(&expected));
    }

    #[test]
    fn test_tail_window() {
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tail(&items, 2, " "), "b c");
        assert_eq!(tail(&items, 5, " "), "a b c");
        assert_eq!(tail(&items, 0, " "), "");
        assert_eq!(tail(&[], 2, " "), "");
    }
}
