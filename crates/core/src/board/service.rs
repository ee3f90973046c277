//! Board refresh service - core business logic
//!
//! A refresh is an explicit two-step pipeline: the kanban worksheet is
//! fetched first, the tracking worksheet strictly after it completes, then
//! both sets are classified and published as a new immutable snapshot.
//!
//! Runtime rules:
//! - at most one refresh is in flight; overlapping triggers are rejected
//! - after [`BoardService::cancel`] no result is ever published
//! - a published snapshot is replaced wholesale, never mutated
//! - the snapshot lock is never held across an `.await`

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use kanban_domain::constants::{KANBAN_WORKSHEET, TRACKING_WORKSHEET};
use kanban_domain::{BoardSnapshot, KanbanRecord, TrackingRecord};
use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::ports::{DynKanbanSource, DynTrackingSource, RecordSource};
use crate::classification::classify;

/// A worksheet that could not be read during a refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Worksheet name as requested
    pub worksheet: String,
    /// Error message, or the sheet's own error text for `success: false`
    pub reason: String,
}

/// Result of a refresh that published a snapshot
#[derive(Debug, Clone)]
pub struct RefreshReport {
    pub snapshot: Arc<BoardSnapshot>,
    /// Sources that were treated as empty; surfaced for the caller to show
    pub failures: Vec<FetchFailure>,
}

impl RefreshReport {
    /// True when both worksheets were read successfully
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of [`BoardService::refresh`]
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// A new snapshot was published
    Published(RefreshReport),
    /// Another refresh was already running; nothing was fetched
    AlreadyInFlight,
    /// The service was cancelled or the result was superseded
    Discarded,
}

impl RefreshOutcome {
    /// The published snapshot, if this refresh published one
    #[must_use]
    pub fn snapshot(&self) -> Option<&Arc<BoardSnapshot>> {
        match self {
            Self::Published(report) => Some(&report.snapshot),
            Self::AlreadyInFlight | Self::Discarded => None,
        }
    }
}

/// Clears the in-flight flag when the refresh ends, including on
/// cancellation or when the refresh future is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Board service holding the latest published snapshot
pub struct BoardService {
    kanban_source: Arc<DynKanbanSource>,
    tracking_source: Arc<DynTrackingSource>,
    kanban_worksheet: String,
    tracking_worksheet: String,
    snapshot: RwLock<Arc<BoardSnapshot>>,
    in_flight: AtomicBool,
    generation: AtomicU64,
    cancellation: CancellationToken,
}

impl BoardService {
    /// Create a board service reading the default worksheets
    pub fn new(kanban_source: Arc<DynKanbanSource>, tracking_source: Arc<DynTrackingSource>) -> Self {
        Self {
            kanban_source,
            tracking_source,
            kanban_worksheet: KANBAN_WORKSHEET.to_string(),
            tracking_worksheet: TRACKING_WORKSHEET.to_string(),
            snapshot: RwLock::new(Arc::new(BoardSnapshot::empty())),
            in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            cancellation: CancellationToken::new(),
        }
    }

    /// Override the worksheet names
    pub fn with_worksheets(
        mut self,
        kanban_worksheet: impl Into<String>,
        tracking_worksheet: impl Into<String>,
    ) -> Self {
        self.kanban_worksheet = kanban_worksheet.into();
        self.tracking_worksheet = tracking_worksheet.into();
        self
    }

    /// Latest published snapshot (generation 0 until the first refresh)
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        Arc::clone(&self.snapshot.read())
    }

    /// Whether a refresh is currently in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Stop publishing results, e.g. when the board view is torn down.
    ///
    /// An in-flight refresh stops waiting on its fetch and is discarded;
    /// later refreshes return [`RefreshOutcome::Discarded`] immediately.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Whether [`BoardService::cancel`] has been called
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Fetch both worksheets, classify and publish a new snapshot.
    #[instrument(skip(self), fields(kanban = %self.kanban_worksheet, tracking = %self.tracking_worksheet))]
    pub async fn refresh(&self) -> RefreshOutcome {
        if self.cancellation.is_cancelled() {
            debug!("board service cancelled; refresh ignored");
            return RefreshOutcome::Discarded;
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("refresh already in flight");
            return RefreshOutcome::AlreadyInFlight;
        };

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(generation, "board refresh started");

        let fetched = tokio::select! {
            biased;
            () = self.cancellation.cancelled() => None,
            fetched = self.fetch_sources() => Some(fetched),
        };

        let Some((kanban, tracking, failures)) = fetched else {
            info!(generation, "board refresh cancelled; result discarded");
            return RefreshOutcome::Discarded;
        };

        let board = classify(&kanban, &tracking);
        let snapshot =
            Arc::new(BoardSnapshot { generation, fetched_at: Some(Utc::now()), kanban, board });

        {
            let mut current = self.snapshot.write();
            if self.cancellation.is_cancelled() || current.generation >= generation {
                info!(generation, current = current.generation, "board refresh superseded; result discarded");
                return RefreshOutcome::Discarded;
            }
            *current = Arc::clone(&snapshot);
        }

        let summary = snapshot.board.summary;
        info!(
            generation,
            total_parts = summary.total_parts,
            needs_ordering = summary.needs_ordering,
            in_progress = summary.in_progress,
            completed = summary.completed,
            failed_sources = failures.len(),
            "board snapshot published"
        );

        RefreshOutcome::Published(RefreshReport { snapshot, failures })
    }

    /// Sequential two-step fetch: tracking starts only after kanban is done.
    async fn fetch_sources(&self) -> (Vec<KanbanRecord>, Vec<TrackingRecord>, Vec<FetchFailure>) {
        let mut failures = Vec::new();
        let kanban =
            fetch_or_empty(self.kanban_source.as_ref(), &self.kanban_worksheet, &mut failures).await;
        let tracking =
            fetch_or_empty(self.tracking_source.as_ref(), &self.tracking_worksheet, &mut failures)
                .await;
        (kanban, tracking, failures)
    }
}

/// Fetch one worksheet, recovering every failure as an empty record set.
async fn fetch_or_empty<T: Send>(
    source: &(dyn RecordSource<T> + Send + Sync),
    worksheet: &str,
    failures: &mut Vec<FetchFailure>,
) -> Vec<T> {
    match source.fetch(worksheet).await {
        Ok(response) => {
            if response.success {
                debug!(worksheet, records = response.data.len(), "worksheet fetched");
            } else {
                let reason = response.error.clone().unwrap_or_else(|| "success=false".to_string());
                warn!(worksheet, reason = %reason, "worksheet reported failure; treating as empty");
                failures.push(FetchFailure { worksheet: worksheet.to_string(), reason });
            }
            response.into_records()
        }
        Err(err) => {
            warn!(worksheet, error = %err, kind = err.label(), "worksheet fetch failed; treating as empty");
            failures.push(FetchFailure { worksheet: worksheet.to_string(), reason: err.to_string() });
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use kanban_domain::{KanbanError, Result, SheetResponse};

    use super::*;

    struct Fixed<T>(Result<SheetResponse<T>>);

    #[async_trait]
    impl<T: Clone + Send + Sync> RecordSource<T> for Fixed<T> {
        async fn fetch(&self, _worksheet: &str) -> Result<SheetResponse<T>> {
            self.0.clone()
        }
    }

    fn part(code: &str, deadline: &str) -> KanbanRecord {
        KanbanRecord {
            kode_part: code.into(),
            deadline_pemesanan: deadline.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_in_flight_guard_is_exclusive_and_resets() {
        let flag = AtomicBool::new(false);
        let first = InFlightGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlightGuard::acquire(&flag).is_none());
        drop(first);
        assert!(InFlightGuard::acquire(&flag).is_some());
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_empty() {
        let service = BoardService::new(
            Arc::new(Fixed::<KanbanRecord>(Ok(SheetResponse::ok(vec![])))),
            Arc::new(Fixed::<TrackingRecord>(Ok(SheetResponse::ok(vec![])))),
        );
        let snapshot = service.snapshot();
        assert_eq!(snapshot.generation, 0);
        assert!(snapshot.board.is_empty());
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_publishes_new_generation() {
        let service = BoardService::new(
            Arc::new(Fixed(Ok(SheetResponse::ok(vec![part("A1", "2024-05-01"), part("A2", "")])))),
            Arc::new(Fixed::<TrackingRecord>(Ok(SheetResponse::ok(vec![])))),
        );

        let before = service.snapshot();
        let outcome = service.refresh().await;
        let published = outcome.snapshot().cloned().unwrap();

        assert_eq!(published.generation, 1);
        assert_eq!(published.board.summary.total_parts, 2);
        assert_eq!(published.board.summary.needs_ordering, 1);
        assert!(Arc::ptr_eq(&published, &service.snapshot()));
        // The earlier snapshot is untouched
        assert_eq!(before.generation, 0);
        assert!(before.board.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_becomes_empty_lane() {
        let service = BoardService::new(
            Arc::new(Fixed::<KanbanRecord>(Err(KanbanError::Network("refused".into())))),
            Arc::new(Fixed::<TrackingRecord>(Ok(SheetResponse::ok(vec![TrackingRecord::default()])))),
        );

        let RefreshOutcome::Published(report) = service.refresh().await else {
            panic!("expected a published snapshot");
        };
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].worksheet, "KANBAN_INTERNAL");
        assert_eq!(report.snapshot.board.summary.total_parts, 0);
        assert_eq!(report.snapshot.board.audit_log.len(), 1);
    }

    #[tokio::test]
    async fn test_unsuccessful_response_drops_its_data() {
        let unsuccessful =
            SheetResponse { success: false, data: vec![part("A1", "2024-05-01")], error: None };
        let service = BoardService::new(
            Arc::new(Fixed(Ok(unsuccessful))),
            Arc::new(Fixed::<TrackingRecord>(Ok(SheetResponse::ok(vec![])))),
        );

        let RefreshOutcome::Published(report) = service.refresh().await else {
            panic!("expected a published snapshot");
        };
        assert!(report.snapshot.kanban.is_empty());
        assert_eq!(report.snapshot.board.summary.total_parts, 0);
        assert_eq!(
            report.failures,
            vec![FetchFailure { worksheet: "KANBAN_INTERNAL".into(), reason: "success=false".into() }]
        );
    }

    #[tokio::test]
    async fn test_refresh_after_cancel_is_discarded() {
        let service = BoardService::new(
            Arc::new(Fixed::<KanbanRecord>(Ok(SheetResponse::ok(vec![part("A1", "2024-05-01")])))),
            Arc::new(Fixed::<TrackingRecord>(Ok(SheetResponse::ok(vec![])))),
        );
        service.cancel();
        assert!(matches!(service.refresh().await, RefreshOutcome::Discarded));
        assert_eq!(service.snapshot().generation, 0);
    }
}
