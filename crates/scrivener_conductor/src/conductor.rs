//! The conductor trait and pipeline runner.

use crate::{ConductorCore, Operation, RunOutcome};
use async_trait::async_trait;
use scrivener_error::{ConductorError, ConductorErrorKind, ScrivenerResult};
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

/// Sequences actor calls into the develop and draft stages for one genre.
#[async_trait]
pub trait Conductor: Send + Sync {
    /// Shared actors and settings.
    fn core(&self) -> &ConductorCore;

    /// Build a story concept in a new project directory.
    async fn develop_concept(&self) -> ScrivenerResult<PathBuf> {
        self.core().develop_concept().await
    }

    /// Write prose for the concept in `project_dir`, returning the files written.
    async fn draft_narrative(&self, project_dir: &Path) -> ScrivenerResult<Vec<PathBuf>>;

    /// Stop all actors.
    fn stop(&self) {
        self.core().stop();
    }

    /// Run the requested stages, then stop the actors whatever the result.
    ///
    /// Each stage runs at most once and `develop` always precedes `draft`,
    /// whatever order they were requested in. `draft` works on the project
    /// created by `develop` in the same run, or else on `project_dir`. A
    /// failure is logged once and ends the run.
    #[instrument(skip(self), fields(genre = %self.core().genre()))]
    async fn run(
        &self,
        operations: &[Operation],
        project_dir: Option<PathBuf>,
    ) -> ScrivenerResult<RunOutcome> {
        let result = run_stages(self, operations, project_dir).await;
        if let Err(e) = &result {
            error!(error = %e, "Pipeline failed");
        }
        self.stop();
        info!("done!");
        result
    }
}

async fn run_stages<C: Conductor + ?Sized>(
    conductor: &C,
    operations: &[Operation],
    project_dir: Option<PathBuf>,
) -> ScrivenerResult<RunOutcome> {
    let mut outcome = RunOutcome {
        project_dir,
        drafted: Vec::new(),
    };

    for operation in Operation::plan(operations) {
        info!(%operation, "Starting stage");
        match operation {
            Operation::Develop => {
                outcome.project_dir = Some(conductor.develop_concept().await?);
            }
            Operation::Draft => {
                let dir = outcome
                    .project_dir
                    .clone()
                    .ok_or_else(|| ConductorError::new(ConductorErrorKind::MissingProject))?;
                let files = conductor.draft_narrative(&dir).await?;
                outcome.drafted.extend(files);
            }
        }
    }

    Ok(outcome)
}
