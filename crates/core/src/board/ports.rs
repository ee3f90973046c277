//! Port interfaces for the record sources
//!
//! The board reads two worksheets from an external system of record. These
//! traits define the boundary; the HTTP adapter lives in `kanban-infra`.

use async_trait::async_trait;
use kanban_domain::{KanbanRecord, Result, SheetResponse, TrackingRecord};

/// A worksheet-backed source of records
#[async_trait]
pub trait RecordSource<T: Send>: Send + Sync {
    /// Fetch every record of `worksheet`.
    ///
    /// `Ok` with `success == false` and `Err` are both treated as "no
    /// records" by the board; implementations should not paper over either.
    async fn fetch(&self, worksheet: &str) -> Result<SheetResponse<T>>;
}

/// Type alias for the kanban source trait object
pub type DynKanbanSource = dyn RecordSource<KanbanRecord> + Send + Sync + 'static;

/// Type alias for the tracking source trait object
pub type DynTrackingSource = dyn RecordSource<TrackingRecord> + Send + Sync + 'static;
