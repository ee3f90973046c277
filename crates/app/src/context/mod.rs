//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Instant;

use kanban_core::{BoardService, DynKanbanSource, DynTrackingSource, RefreshOutcome};
use kanban_domain::{Config, Result};
use kanban_infra::SheetsClient;
use tracing::info;

use crate::utils::logging::log_refresh_outcome;
use crate::view::BoardView;

/// Application context - holds the board service and its configuration
pub struct AppContext {
    pub config: Config,
    pub board: Arc<BoardService>,
}

impl AppContext {
    /// Wire the HTTP sheets adapter for both record sources.
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(SheetsClient::from_config(&config.sheets)?);
        info!(
            base_url = %config.sheets.base_url,
            kanban = %config.sheets.kanban_worksheet,
            tracking = %config.sheets.tracking_worksheet,
            "sheets client configured"
        );
        Ok(Self::with_sources(config, client.clone(), client))
    }

    /// Build the context over arbitrary record sources.
    pub fn with_sources(
        config: Config,
        kanban: Arc<DynKanbanSource>,
        tracking: Arc<DynTrackingSource>,
    ) -> Self {
        let board = BoardService::new(kanban, tracking).with_worksheets(
            config.sheets.kanban_worksheet.clone(),
            config.sheets.tracking_worksheet.clone(),
        );
        Self { config, board: Arc::new(board) }
    }

    /// Run one refresh cycle and log its outcome.
    pub async fn refresh(&self) -> RefreshOutcome {
        let started = Instant::now();
        let outcome = self.board.refresh().await;
        log_refresh_outcome(&outcome, started.elapsed());
        outcome
    }

    /// Render the latest published snapshot.
    pub fn current_view(&self) -> BoardView {
        BoardView::render(&self.board.snapshot(), &self.config.board)
    }

    /// Render the result of a refresh; falls back to the current snapshot
    /// when nothing new was published.
    pub fn view_for(&self, outcome: &RefreshOutcome) -> BoardView {
        match outcome {
            RefreshOutcome::Published(report) => {
                BoardView::render(&report.snapshot, &self.config.board)
                    .with_failures(&report.failures)
            }
            RefreshOutcome::AlreadyInFlight | RefreshOutcome::Discarded => self.current_view(),
        }
    }

    /// Stop publishing; any in-flight refresh is discarded.
    pub fn shutdown(&self) {
        self.board.cancel();
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.board.cancel();
    }
}
