//! The bundled prompt table covers every step in both creative modes.

use scrivener_prompts::{PromptManager, PromptVars, render};

const STEPS: &[&str] = &[
    "IDEATE",
    "DEVELOP_PLOT.BASE",
    "DEVELOP_PLOT.UNASSISTED",
    "DEVELOP_PLOT.WITH_FEEDBACK",
    "DEVELOP_THEME.UNASSISTED",
    "DEVELOP_CHARACTERS.BASE",
    "DEVELOP_CHARACTERS.UNASSISTED",
    "DEVELOP_CHARACTERS.WITH_FEEDBACK",
    "DEVELOP_WORLD.BASE",
    "DEVELOP_WORLD.UNASSISTED",
    "DEVELOP_WORLD.WITH_FEEDBACK",
    "DEVELOP_STORYLINE.BASE",
    "DEVELOP_STORYLINE.UNASSISTED",
    "DEVELOP_STORYLINE.WITH_FEEDBACK",
    "SUMMARIZE_CONCEPT",
    "CRITIQUE_CONCEPT",
    "DRAFT.SECTION",
    "DRAFT.REVISE",
    "EDIT.SUMMARIZE_SECTION",
    "EDIT.REVIEW_SECTION",
];

const VARIABLES: &[&str] = &[
    "genre",
    "starter",
    "format_instructions",
    "concept",
    "plot",
    "themes",
    "characters",
    "world",
    "storyline",
    "feedback",
    "text",
    "num_words",
    "section_number",
    "total_sections",
    "preceding_sections",
    "extended_context",
];

#[test]
fn test_bundled_prompts_cover_every_step() {
    let prompts = PromptManager::bundled().unwrap();

    for mode in ["AUTHOR", "PODCAST"] {
        for step in STEPS {
            let path = format!("{mode}.{step}");
            let template = prompts
                .get_prompt(path.as_str(), None)
                .unwrap_or_else(|e| panic!("{path}: {e}"));
            assert!(!template.trim().is_empty(), "{path} is blank");
        }
    }
}

#[test]
fn test_bundled_prompts_use_known_variables() {
    let prompts = PromptManager::bundled().unwrap();
    let vars = VARIABLES
        .iter()
        .fold(PromptVars::new(), |vars, name| vars.with(*name, "x"));

    for mode in ["AUTHOR", "PODCAST"] {
        for step in STEPS {
            let path = format!("{mode}.{step}");
            let template = prompts.get_prompt(path.as_str(), None).unwrap();
            let rendered = render(template, &vars).unwrap_or_else(|e| panic!("{path}: {e}"));
            assert!(!rendered.contains("{{"), "{path} left a placeholder");
        }
    }
}
