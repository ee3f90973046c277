//! # Kanban Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The classification engine deriving board lanes and counts
//! - Port interfaces (traits) for the two record sources
//! - The board refresh pipeline publishing immutable snapshots
//!
//! ## Architecture Principles
//! - Only depends on `kanban-domain`
//! - No HTTP or file-system code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod board;
pub mod classification;

// Re-export specific items to avoid ambiguity
pub use board::ports::{DynKanbanSource, DynTrackingSource, RecordSource};
pub use board::{BoardService, FetchFailure, RefreshOutcome, RefreshReport};
pub use classification::{
    classify, count_total, derive_completed, derive_in_progress, derive_needs_ordering,
    format_deadline, ClassificationEngine,
};
