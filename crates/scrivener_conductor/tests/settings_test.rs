//! Configuration layering.

use scrivener_conductor::{CONFIG_FILE_NAME, ScrivenerConfig};
use scrivener_error::{ConfigErrorKind, ScrivenerErrorKind};
use scrivener_models::LlmEnvironment;
use std::path::PathBuf;

#[test]
fn test_bundled_defaults() {
    let config = ScrivenerConfig::bundled().unwrap();

    assert_eq!(*config.llm().environment(), LlmEnvironment::Local);
    assert_eq!(*config.ideation().workers(), 4);
    assert_eq!(*config.actors().log_truncate(), 100);
    assert!(config.prompts().file().is_none());

    let longform = config.draft().longform();
    assert_eq!(*longform.chapters(), 12);
    assert_eq!(*longform.pages_per_chapter(), 10);
    assert_eq!(*longform.words_per_page(), 300);
    assert!(!longform.editorial_pass());
    assert_eq!(*config.draft().podcast().segments(), 6);
}

#[test]
fn test_overrides_keep_other_defaults() {
    let config = ScrivenerConfig::from_toml_str(
        r#"
[llm]
environment = "anthropic"

[draft.longform]
chapters = 3
"#,
    )
    .unwrap();

    assert_eq!(*config.llm().environment(), LlmEnvironment::Anthropic);
    assert_eq!(*config.draft().longform().chapters(), 3);
    assert_eq!(*config.draft().longform().pages_per_chapter(), 10);
    assert_eq!(config.llm().local().model(), "llama3.2");
}

#[test]
fn test_invalid_value_is_config_error() {
    let err = ScrivenerConfig::from_toml_str("[ideation]\nworkers = \"many\"\n").unwrap_err();
    assert!(matches!(
        err.kind(),
        ScrivenerErrorKind::Config(e) if matches!(e.kind, ConfigErrorKind::Deserialize(_))
    ));
}

#[test]
fn test_load_working_dir_then_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[draft.podcast]\nsegments = 2\nwords_per_segment = 100\n",
    )
    .unwrap();
    let explicit = dir.path().join("override.toml");
    std::fs::write(&explicit, "[draft.podcast]\nsegments = 9\n").unwrap();

    let from_dir = ScrivenerConfig::load(Some(dir.path()), None).unwrap();
    assert_eq!(*from_dir.draft().podcast().segments(), 2);
    assert_eq!(*from_dir.draft().podcast().words_per_segment(), 100);

    let layered = ScrivenerConfig::load(Some(dir.path()), Some(&explicit)).unwrap();
    assert_eq!(*layered.draft().podcast().segments(), 9);
    assert_eq!(*layered.draft().podcast().words_per_segment(), 100);
}

#[test]
fn test_load_prompt_file_setting() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[prompts]\nfile = \"my_prompts.toml\"\n",
    )
    .unwrap();

    let config = ScrivenerConfig::load(Some(dir.path()), None).unwrap();
    assert_eq!(
        config.prompts().file().as_deref(),
        Some(PathBuf::from("my_prompts.toml").as_path())
    );
}

#[test]
fn test_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScrivenerConfig::load(None, Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(
        err.kind(),
        ScrivenerErrorKind::Config(e)
            if matches!(&e.kind, ConfigErrorKind::FileNotFound(p) if p.ends_with("absent.toml"))
    ));
}
