//! Scrivener CLI binary.
//!
//! Develops a story concept with an author, critic and editor, then drafts
//! it chapter by chapter (novels) or segment by segment (podcasts).

use clap::Parser;
use scrivener::{Cli, init_tracing, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keys such as ANTHROPIC_API_KEY may live in .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = run(cli).await?;
    for file in &outcome.drafted {
        println!("{}", file.display());
    }

    Ok(())
}
