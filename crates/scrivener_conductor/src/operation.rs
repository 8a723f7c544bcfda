//! Pipeline stages selectable from the command line.

use std::path::PathBuf;

/// A pipeline stage.
///
/// # Examples
///
/// ```
/// use scrivener_conductor::Operation;
///
/// assert_eq!("Draft".parse::<Operation>().unwrap(), Operation::Draft);
/// assert_eq!(Operation::Develop.as_ref(), "develop");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Operation {
    /// Build the story concept
    Develop,
    /// Write prose from a developed concept
    Draft,
}

impl Operation {
    /// Stages to run for a requested set: each at most once, develop before draft.
    pub fn plan(requested: &[Operation]) -> Vec<Operation> {
        let mut stages = requested.to_vec();
        stages.sort_unstable();
        stages.dedup();
        stages
    }
}

/// What a pipeline run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Project directory developed or drafted
    pub project_dir: Option<PathBuf>,
    /// Chapter or segment files written
    pub drafted: Vec<PathBuf>,
}
