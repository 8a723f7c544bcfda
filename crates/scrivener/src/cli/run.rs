//! Pipeline execution from parsed arguments.

use crate::Cli;
use scrivener_actors::Human;
use scrivener_conductor::{Operation, RunOutcome, ScrivenerConfig, build_conductor};
use scrivener_error::{ConductorError, ConductorErrorKind, ScrivenerResult};
use scrivener_models::build_driver;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Project directory a run starts from.
///
/// A run that drafts without developing first needs an existing project.
/// Relative paths resolve against `working_dir`.
pub fn resolve_project(
    working_dir: &Path,
    project: Option<&Path>,
    operations: &[Operation],
) -> ScrivenerResult<Option<PathBuf>> {
    let Some(project) = project else {
        return match Operation::plan(operations).first() {
            Some(Operation::Draft) => {
                Err(ConductorError::new(ConductorErrorKind::MissingProject).into())
            }
            _ => Ok(None),
        };
    };

    let dir = working_dir.join(project);
    if !dir.is_dir() {
        return Err(
            ConductorError::new(ConductorErrorKind::MissingDirectory(dir.display().to_string()))
                .into(),
        );
    }
    Ok(Some(dir))
}

/// Load configuration, build the conductor and run the requested stages.
#[instrument(skip(cli), fields(genre = %cli.genre, working_dir = %cli.working_dir.display()))]
pub async fn run(cli: Cli) -> ScrivenerResult<RunOutcome> {
    let operations = Operation::plan(&cli.operations);
    let project_dir = resolve_project(&cli.working_dir, cli.project.as_deref(), &operations)?;
    let config = ScrivenerConfig::load(Some(&cli.working_dir), cli.config.as_deref())?;

    let environment = cli.environment.unwrap_or(*config.llm().environment());
    let driver = build_driver(environment, config.llm())?;

    let conductor = build_conductor(
        cli.genre,
        &cli.working_dir,
        config,
        driver,
        Human::stdio(),
    )?;
    let outcome = conductor.run(&operations, project_dir).await?;

    if let Some(dir) = &outcome.project_dir {
        info!(project_dir = %dir.display(), drafted = outcome.drafted.len(), "Run complete");
    }
    Ok(outcome)
}
