//! Board lanes, summary counts and the published snapshot

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kanban::KanbanRecord;
use super::tracking::TrackingRecord;

/// One of the three classification buckets shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    NotStarted,
    OnProcess,
    Completed,
}

impl Lane {
    /// Lanes in board order, left to right
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::OnProcess, Self::Completed];

    pub fn title(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::OnProcess => "On Process",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Header counts shown above the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    /// Every part in the kanban sheet
    pub total_parts: usize,
    /// Parts that must be ordered this month
    pub needs_ordering: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Classified view of one kanban/tracking fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub not_started: Vec<KanbanRecord>,
    pub on_process: Vec<TrackingRecord>,
    pub completed: Vec<TrackingRecord>,
    /// Every tracking entry in source order, rendered as the flat table
    pub audit_log: Vec<TrackingRecord>,
    pub summary: BoardSummary,
}

impl Board {
    /// Number of cards in `lane`
    pub fn lane_len(&self, lane: Lane) -> usize {
        match lane {
            Lane::NotStarted => self.not_started.len(),
            Lane::OnProcess => self.on_process.len(),
            Lane::Completed => self.completed.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.not_started.is_empty()
            && self.on_process.is_empty()
            && self.completed.is_empty()
            && self.audit_log.is_empty()
    }
}

/// Immutable result of one refresh cycle.
///
/// Snapshots are replaced wholesale; a published snapshot is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Monotonic refresh counter, 0 for the initial empty snapshot
    pub generation: u64,
    /// When the records were fetched; `None` before the first refresh
    pub fetched_at: Option<DateTime<Utc>>,
    /// Raw kanban set the board was derived from
    pub kanban: Vec<KanbanRecord>,
    pub board: Board,
}

impl BoardSnapshot {
    /// Placeholder published before the first refresh completes
    pub fn empty() -> Self {
        Self::default()
    }
}
