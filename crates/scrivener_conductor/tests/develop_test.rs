//! The develop pipeline against a scripted model and human.

mod test_utils;

use scrivener_conductor::{
    CONCEPT_FILE, CONTEXT_FILE, Conductor, PaperbackWriter, SUMMARY_FILE, HistoryPodcaster,
};
use scrivener_core::StoryContext;
use scrivener_error::{ConductorErrorKind, ScrivenerErrorKind};
use test_utils::{Script, preamble_of, prompt_of, scripted_driver, scripted_human, test_config};

#[tokio::test]
async fn test_develop_concept_with_revision() {
    let dir = tempfile::tempdir().unwrap();
    let driver = scripted_driver(Script::default());
    let writer = PaperbackWriter::new(
        dir.path(),
        test_config(""),
        driver.clone(),
        scripted_human("fantasy\nmagical library\n3\n2\n"),
    )
    .unwrap();

    let project_dir = writer.develop_concept().await.unwrap();

    assert!(project_dir.starts_with(dir.path()));
    let name = project_dir.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.ends_with("-longform-fiction"), "{name}");
    assert!(!name.contains(' '));

    let concept = std::fs::read_to_string(project_dir.join(CONCEPT_FILE)).unwrap();
    let context = std::fs::read_to_string(project_dir.join(CONTEXT_FILE)).unwrap();
    let summary = std::fs::read_to_string(project_dir.join(SUMMARY_FILE)).unwrap();

    let concept = StoryContext::from_json(&concept).unwrap();
    let context = StoryContext::from_json(&context).unwrap();
    assert_eq!(concept.concept.as_deref(), Some("Idea B"));
    assert_eq!(context.concept.as_deref(), Some("Idea B"));
    assert!(context.storyline.is_some());
    assert!(context.themes.is_some());
    assert_eq!(summary, "# Summary");

    // 3 ideation, 5 develop, 1 critique, 4 revisions, 1 summary
    assert_eq!(driver.call_count(), 14);

    let requests = driver.requests();
    let revisions: Vec<_> = requests
        .iter()
        .filter(|r| prompt_of(r).contains("FEEDBACK: Add a twist."))
        .collect();
    assert_eq!(revisions.len(), 4);
    assert!(revisions.iter().all(|r| preamble_of(r) == "AUTHOR"));
    assert_eq!(
        requests.iter().filter(|r| preamble_of(r) == "CRITIC").count(),
        1
    );
}

#[tokio::test]
async fn test_develop_skips_revision_when_critic_is_satisfied() {
    let dir = tempfile::tempdir().unwrap();
    let driver = scripted_driver(Script {
        critique: "NO CHANGES NEEDED",
        ..Script::default()
    });
    let writer = PaperbackWriter::new(
        dir.path(),
        test_config(""),
        driver.clone(),
        scripted_human("fantasy\nmagical library\n1\n1\n"),
    )
    .unwrap();

    let project_dir = writer.develop_concept().await.unwrap();

    // 1 ideation, 5 develop, 1 critique, 1 summary
    assert_eq!(driver.call_count(), 8);
    assert!(
        !driver
            .requests()
            .iter()
            .any(|r| prompt_of(r).contains("FEEDBACK:"))
    );
    assert!(project_dir.join(CONTEXT_FILE).is_file());
}

#[tokio::test]
async fn test_podcast_develop_uses_podcast_prompts() {
    let dir = tempfile::tempdir().unwrap();
    let driver = scripted_driver(Script::default());
    let podcaster = HistoryPodcaster::new(
        dir.path(),
        test_config(""),
        driver.clone(),
        scripted_human("the Hanseatic League\nsalt\n1\n1\n"),
    )
    .unwrap();

    let project_dir = podcaster.develop_concept().await.unwrap();

    assert!(project_dir.to_string_lossy().ends_with("-podcast"));
    assert!(prompt_of(&driver.requests()[0]).contains("narrative history podcast about the Hanseatic League"));
}

#[tokio::test]
async fn test_invalid_selection_fails_the_stage() {
    let dir = tempfile::tempdir().unwrap();
    let driver = scripted_driver(Script::default());
    let writer = PaperbackWriter::new(
        dir.path(),
        test_config(""),
        driver.clone(),
        scripted_human("fantasy\nmagical library\n1\n9\n"),
    )
    .unwrap();

    let err = writer.develop_concept().await.unwrap_err();

    assert!(matches!(err.kind(), ScrivenerErrorKind::Actor(_)));
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn test_empty_ideation_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let driver = scripted_driver(Script {
        ideas: "[]",
        ..Script::default()
    });
    let writer = PaperbackWriter::new(
        dir.path(),
        test_config(""),
        driver,
        scripted_human("fantasy\nmagical library\n2\n1\n"),
    )
    .unwrap();

    let err = writer.develop_concept().await.unwrap_err();

    match err.kind() {
        ScrivenerErrorKind::Conductor(e) => assert_eq!(e.kind, ConductorErrorKind::NoIdeas),
        other => panic!("unexpected error: {other}"),
    }
}
