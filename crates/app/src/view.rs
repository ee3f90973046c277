//! Display model of a board snapshot
//!
//! Turns the classified lanes into cards carrying exactly what the board
//! shows: formatted deadlines, order quantities and the purchase-request
//! link for parts that still need ordering.

use chrono::{DateTime, Utc};
use kanban_core::{ClassificationEngine, FetchFailure};
use kanban_domain::{
    BoardConfig, BoardSnapshot, BoardSummary, DateLocale, KanbanRecord, Lane, PurchaseRequestLink,
    TrackingRecord,
};
use serde::Serialize;

/// One card on the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub kode_part: String,
    pub part: String,
    /// Quantity to order, as shown on the card
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_request_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneView {
    pub lane: Lane,
    pub title: &'static str,
    pub cards: Vec<CardView>,
}

/// Serializable rendering of a [`BoardSnapshot`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub generation: u64,
    pub fetched_at: Option<DateTime<Utc>>,
    pub locale: DateLocale,
    pub summary: BoardSummary,
    /// Not Started, On Process and Completed, in board order
    pub lanes: Vec<LaneView>,
    /// Full tracking log for the table below the board
    pub audit_log: Vec<TrackingRecord>,
    /// Sources that were unavailable and shown as empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl BoardView {
    pub fn render(snapshot: &BoardSnapshot, config: &BoardConfig) -> Self {
        let engine = ClassificationEngine::new(config.locale);
        let board = &snapshot.board;

        let lanes = Lane::ALL
            .into_iter()
            .map(|lane| {
                let cards = match lane {
                    Lane::NotStarted => board
                        .not_started
                        .iter()
                        .map(|record| not_started_card(record, &engine, &config.form_path))
                        .collect(),
                    Lane::OnProcess => board.on_process.iter().map(on_process_card).collect(),
                    Lane::Completed => board.completed.iter().map(completed_card).collect(),
                };
                LaneView { lane, title: lane.title(), cards }
            })
            .collect();

        Self {
            generation: snapshot.generation,
            fetched_at: snapshot.fetched_at,
            locale: engine.locale(),
            summary: board.summary,
            lanes,
            audit_log: board.audit_log.clone(),
            warnings: Vec::new(),
        }
    }

    /// Attach a warning per source that could not be fetched.
    pub fn with_failures(mut self, failures: &[FetchFailure]) -> Self {
        self.warnings = failures
            .iter()
            .map(|failure| format!("{}: {}", failure.worksheet, failure.reason))
            .collect();
        self
    }

    pub fn lane(&self, lane: Lane) -> Option<&LaneView> {
        self.lanes.iter().find(|view| view.lane == lane)
    }
}

fn not_started_card(
    record: &KanbanRecord,
    engine: &ClassificationEngine,
    form_path: &str,
) -> CardView {
    CardView {
        kode_part: record.kode_part.clone(),
        part: record.part.clone(),
        quantity: record
            .quantity_to_order()
            .map_or_else(|| record.qty_yang_dipesan.clone(), |qty| format_quantity(Some(qty))),
        month: Some(record.untuk_bulan.clone()),
        deadline: Some(engine.deadline_label(record)),
        status: None,
        purchase_request_url: Some(PurchaseRequestLink::from_record(record).to_url(form_path)),
    }
}

fn on_process_card(record: &TrackingRecord) -> CardView {
    CardView {
        status: Some(record.status.to_string()),
        ..tracking_card(record)
    }
}

fn completed_card(record: &TrackingRecord) -> CardView {
    tracking_card(record)
}

fn tracking_card(record: &TrackingRecord) -> CardView {
    CardView {
        kode_part: record.kode_part.clone(),
        part: record.part.clone(),
        quantity: format_quantity(record.qty_order),
        month: None,
        deadline: None,
        status: None,
        purchase_request_url: None,
    }
}

/// Whole quantities print without a fractional part.
fn format_quantity(quantity: Option<f64>) -> String {
    match quantity {
        Some(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}
