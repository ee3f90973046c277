//! Domain types and models

pub mod board;
pub mod kanban;
pub mod sheet;
pub mod tracking;

pub use board::{Board, BoardSnapshot, BoardSummary, Lane};
pub use kanban::KanbanRecord;
pub use sheet::SheetResponse;
pub use tracking::{KanbanType, TrackingRecord, TrackingStatus};
