//! Tracing initialisation and structured log helpers

use std::time::Duration;

use kanban_core::RefreshOutcome;
use kanban_domain::{KanbanError, LoggingConfig, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config.level` is used. Output is
/// newline-delimited JSON when `config.format` is `json`, human-readable
/// otherwise. Logs go to stderr so stdout stays free for board output.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| KanbanError::Config(format!("Invalid log level {:?}: {e}", config.level)))?;

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(true);

    let installed = if config.format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.with_line_number(true).try_init()
    };

    installed.map_err(|e| KanbanError::Internal(format!("Failed to install tracing subscriber: {e}")))
}

/// Log the outcome of a board refresh with structured fields.
pub fn log_refresh_outcome(outcome: &RefreshOutcome, elapsed: Duration) {
    let duration_ms = elapsed.as_millis() as u64;

    match outcome {
        RefreshOutcome::Published(report) if report.is_complete() => {
            info!(generation = report.snapshot.generation, duration_ms, "board_refresh_success");
        }
        RefreshOutcome::Published(report) => {
            let worksheets: Vec<&str> =
                report.failures.iter().map(|f| f.worksheet.as_str()).collect();
            warn!(
                generation = report.snapshot.generation,
                duration_ms,
                failed = ?worksheets,
                "board_refresh_partial"
            );
        }
        RefreshOutcome::AlreadyInFlight => info!(duration_ms, "board_refresh_skipped"),
        RefreshOutcome::Discarded => info!(duration_ms, "board_refresh_discarded"),
    }
}
