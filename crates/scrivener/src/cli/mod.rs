//! Command-line interface module.

mod commands;
mod run;

pub use commands::Cli;
pub use run::{init_tracing, resolve_project, run};
