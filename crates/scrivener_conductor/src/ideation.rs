//! Parallel ideation on a fixed number of slots.

use futures::stream::{self, StreamExt};
use scrivener_actors::Author;
use scrivener_error::{ConductorError, ConductorErrorKind, ScrivenerResult};
use tracing::{info, instrument, warn};

/// Run `calls` ideation requests with at most `workers` in flight.
///
/// Ideas from every successful call are collected, in completion order,
/// with duplicates removed. Failed calls are logged and skipped.
///
/// # Errors
///
/// Fails with [`ConductorErrorKind::Worker`] when every call fails and with
/// [`ConductorErrorKind::NoIdeas`] when the calls return nothing usable.
#[instrument(skip(author, starter))]
pub async fn ideate_parallel(
    author: &Author,
    genre: &str,
    starter: &str,
    calls: usize,
    workers: usize,
) -> ScrivenerResult<Vec<String>> {
    let workers = workers.max(1);
    info!("Ideating");

    let results: Vec<_> = stream::iter(0..calls)
        .map(|slot| async move { (slot, author.ideate(genre, starter).await) })
        .buffer_unordered(workers)
        .collect()
        .await;

    let mut ideas: Vec<String> = Vec::new();
    let mut failures = 0;
    let mut last_failure = None;
    for (slot, result) in results {
        match result {
            Ok(batch) => {
                for idea in batch {
                    if !ideas.contains(&idea) {
                        ideas.push(idea);
                    }
                }
            }
            Err(e) => {
                warn!(slot, error = %e, "Ideation call failed");
                failures += 1;
                last_failure = Some(e);
            }
        }
    }

    if ideas.is_empty() {
        return Err(match last_failure {
            Some(e) if failures == calls => {
                ConductorError::new(ConductorErrorKind::Worker(e.to_string()))
            }
            _ => ConductorError::new(ConductorErrorKind::NoIdeas),
        }
        .into());
    }

    info!(ideas = ideas.len(), "Ideation complete");
    Ok(ideas)
}
