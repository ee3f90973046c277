//! Kanban board - one-shot refresh
//!
//! Loads configuration, fetches both worksheets once and prints the
//! classified board as JSON on stdout.

use std::io::Write;

use anyhow::Context;
use kanban_app::utils::logging::init_tracing;
use kanban_app::AppContext;
use kanban_infra::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialise logging")?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let context = AppContext::new(config).context("failed to build application context")?;
    let outcome = context.refresh().await;
    let view = context.view_for(&outcome);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &view).context("failed to serialize board")?;
    writeln!(stdout).context("failed to write board")?;

    Ok(())
}
