//! Sheet row fixtures

use kanban_domain::{KanbanRecord, KanbanType, TrackingRecord, TrackingStatus};

pub fn kanban_row(code: &str, deadline: &str) -> KanbanRecord {
    KanbanRecord {
        kode_part: code.to_string(),
        part: format!("Part {code}"),
        deadline_pemesanan: deadline.to_string(),
        ..Default::default()
    }
}

pub fn tracking_row(code: &str, tipe: &str, status: &str) -> TrackingRecord {
    TrackingRecord {
        kode_part: code.to_string(),
        tipe_kanban: KanbanType::from(tipe),
        status: TrackingStatus::from(status),
        ..Default::default()
    }
}

/// Kanban sheet with two parts awaiting an order and one settled part
pub fn kanban_sheet() -> Vec<KanbanRecord> {
    vec![kanban_row("A1", "2024-05-01"), kanban_row("A2", ""), kanban_row("A3", "2024-06-15")]
}

/// Tracking sheet covering every lane combination
pub fn tracking_sheet() -> Vec<TrackingRecord> {
    vec![
        tracking_row("A1", "INTERNAL", "PO Diajukan"),
        tracking_row("B1", "EXTERNAL", "PO Diajukan"),
        tracking_row("B2", "EXTERNAL", "Sudah Diterima"),
        tracking_row("C1", "INTERNAL", "Sudah Diterima"),
        tracking_row("C2", "INTERNAL", "Menunggu"),
    ]
}
