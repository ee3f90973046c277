//! Lane derivation for the kanban board
//!
//! Every function here is pure: inputs are borrowed immutably, each call
//! returns a fresh vector, and source order is preserved. Identical inputs
//! always produce identical outputs.
//!
//! Lanes are derived independently from their own source. Kanban and
//! tracking records are never joined on `kodepart`.

use kanban_domain::{
    Board, BoardSummary, DateLocale, KanbanRecord, KanbanType, TrackingRecord, TrackingStatus,
};
use tracing::debug;

use super::deadline::format_deadline;

/// Parts that still need an order placed ("Not Started" lane).
///
/// Keeps a record iff its deadline cell is non-empty. Malformed deadlines
/// still count; only the rendered label degrades.
#[must_use]
pub fn derive_needs_ordering(kanban: &[KanbanRecord]) -> Vec<KanbanRecord> {
    kanban.iter().filter(|record| record.needs_ordering()).cloned().collect()
}

/// Number of parts on the kanban sheet, unconstrained.
#[must_use]
pub fn count_total(kanban: &[KanbanRecord]) -> usize {
    kanban.len()
}

/// Whether an order event belongs in the "On Process" lane.
#[must_use]
pub fn is_in_progress(record: &TrackingRecord) -> bool {
    matches!(
        (&record.tipe_kanban, &record.status),
        (KanbanType::Internal, TrackingStatus::Submitted)
    )
}

/// Whether an order event belongs in the "Completed" lane.
///
/// Unlike [`is_in_progress`] this does not look at `tipekanban`: received
/// orders of any kanban type are shown as completed. Keep the two predicates
/// distinct.
#[must_use]
pub fn is_completed(record: &TrackingRecord) -> bool {
    matches!(record.status, TrackingStatus::Received)
}

/// Internal orders whose purchase order has been submitted.
#[must_use]
pub fn derive_in_progress(tracking: &[TrackingRecord]) -> Vec<TrackingRecord> {
    tracking.iter().filter(|record| is_in_progress(record)).cloned().collect()
}

/// Orders whose goods have been received, regardless of kanban type.
#[must_use]
pub fn derive_completed(tracking: &[TrackingRecord]) -> Vec<TrackingRecord> {
    tracking.iter().filter(|record| is_completed(record)).cloned().collect()
}

/// Derive every lane, the audit log and the summary counts in one pass
/// over each source.
#[must_use]
pub fn classify(kanban: &[KanbanRecord], tracking: &[TrackingRecord]) -> Board {
    let not_started = derive_needs_ordering(kanban);
    let on_process = derive_in_progress(tracking);
    let completed = derive_completed(tracking);

    let summary = BoardSummary {
        total_parts: count_total(kanban),
        needs_ordering: not_started.len(),
        in_progress: on_process.len(),
        completed: completed.len(),
    };

    debug!(
        total_parts = summary.total_parts,
        needs_ordering = summary.needs_ordering,
        in_progress = summary.in_progress,
        completed = summary.completed,
        tracking_entries = tracking.len(),
        "classified kanban board"
    );

    Board { not_started, on_process, completed, audit_log: tracking.to_vec(), summary }
}

/// Classification bound to a display locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationEngine {
    locale: DateLocale,
}

impl ClassificationEngine {
    /// Create an engine rendering deadlines in `locale`
    #[must_use]
    pub const fn new(locale: DateLocale) -> Self {
        Self { locale }
    }

    /// Locale used for deadline labels
    #[must_use]
    pub const fn locale(&self) -> DateLocale {
        self.locale
    }

    /// Same as the free [`classify`]; lanes do not depend on the locale.
    #[must_use]
    pub fn classify(&self, kanban: &[KanbanRecord], tracking: &[TrackingRecord]) -> Board {
        classify(kanban, tracking)
    }

    /// Deadline label for a Not Started card in the engine's locale
    #[must_use]
    pub fn deadline_label(&self, record: &KanbanRecord) -> String {
        format_deadline(&record.deadline_pemesanan, self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kanban(code: &str, deadline: &str) -> KanbanRecord {
        KanbanRecord {
            kode_part: code.into(),
            deadline_pemesanan: deadline.into(),
            ..Default::default()
        }
    }

    fn tracking(code: &str, tipe: &str, status: &str) -> TrackingRecord {
        TrackingRecord {
            kode_part: code.into(),
            tipe_kanban: KanbanType::from(tipe),
            status: TrackingStatus::from(status),
            ..Default::default()
        }
    }

    fn codes_k(records: &[KanbanRecord]) -> Vec<&str> {
        records.iter().map(|r| r.kode_part.as_str()).collect()
    }

    fn codes_t(records: &[TrackingRecord]) -> Vec<&str> {
        records.iter().map(|r| r.kode_part.as_str()).collect()
    }

    #[test]
    fn test_needs_ordering_keeps_only_non_empty_deadlines() {
        let input = vec![kanban("A1", "2024-05-01"), kanban("A2", "")];
        let result = derive_needs_ordering(&input);
        assert_eq!(codes_k(&result), vec!["A1"]);
        assert_eq!(count_total(&input), 2);
    }

    #[test]
    fn test_needs_ordering_preserves_source_order() {
        let input = vec![
            kanban("C3", "2024-07-01"),
            kanban("X", ""),
            kanban("A1", "2024-05-01"),
            kanban("B2", "2024-06-01"),
        ];
        assert_eq!(codes_k(&derive_needs_ordering(&input)), vec!["C3", "A1", "B2"]);
    }

    #[test]
    fn test_needs_ordering_keeps_malformed_and_whitespace_deadlines() {
        let input = vec![kanban("A1", "not-a-date"), kanban("A2", " ")];
        assert_eq!(derive_needs_ordering(&input).len(), 2);
    }

    #[test]
    fn test_in_progress_requires_internal_and_submitted() {
        let input = vec![
            tracking("A1", "INTERNAL", "PO Diajukan"),
            tracking("A2", "EXTERNAL", "PO Diajukan"),
            tracking("A3", "INTERNAL", "Sudah Diterima"),
            tracking("A4", "internal", "PO Diajukan"),
            tracking("A5", "INTERNAL", "PO diajukan"),
        ];
        assert_eq!(codes_t(&derive_in_progress(&input)), vec!["A1"]);
    }

    #[test]
    fn test_completed_ignores_kanban_type() {
        let input = vec![
            tracking("A1", "INTERNAL", "Sudah Diterima"),
            tracking("A2", "EXTERNAL", "Sudah Diterima"),
            tracking("A3", "", "Sudah Diterima"),
            tracking("A4", "INTERNAL", "PO Diajukan"),
            tracking("A5", "INTERNAL", "sudah diterima"),
        ];
        assert_eq!(codes_t(&derive_completed(&input)), vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn test_changing_either_field_moves_record_out_of_progress() {
        let base = tracking("A1", "INTERNAL", "PO Diajukan");
        assert!(is_in_progress(&base));

        let mut other_type = base.clone();
        other_type.tipe_kanban = KanbanType::from("EXTERNAL");
        assert!(!is_in_progress(&other_type));

        let mut other_status = base;
        other_status.status = TrackingStatus::Received;
        assert!(!is_in_progress(&other_status));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(derive_needs_ordering(&[]).is_empty());
        assert!(derive_in_progress(&[]).is_empty());
        assert!(derive_completed(&[]).is_empty());
        assert_eq!(count_total(&[]), 0);

        let board = classify(&[], &[]);
        assert!(board.is_empty());
        assert_eq!(board.summary, BoardSummary::default());
    }

    #[test]
    fn test_classify_is_idempotent() {
        let kanban_set = vec![kanban("A1", "2024-05-01"), kanban("A2", "")];
        let tracking_set = vec![
            tracking("A1", "INTERNAL", "PO Diajukan"),
            tracking("B1", "EXTERNAL", "Sudah Diterima"),
        ];

        let first = classify(&kanban_set, &tracking_set);
        let second = classify(&kanban_set, &tracking_set);
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_fills_summary_and_audit_log() {
        let kanban_set = vec![kanban("A1", "2024-05-01"), kanban("A2", ""), kanban("A3", "x")];
        let tracking_set = vec![
            tracking("A1", "INTERNAL", "PO Diajukan"),
            tracking("A1", "INTERNAL", "Sudah Diterima"),
            tracking("B1", "EXTERNAL", "Sudah Diterima"),
            tracking("B2", "EXTERNAL", "Menunggu"),
        ];

        let board = classify(&kanban_set, &tracking_set);
        assert_eq!(
            board.summary,
            BoardSummary { total_parts: 3, needs_ordering: 2, in_progress: 1, completed: 2 }
        );
        assert_eq!(board.audit_log, tracking_set);
    }

    #[test]
    fn test_engine_deadline_label() {
        let engine = ClassificationEngine::new(DateLocale::Indonesian);
        assert_eq!(engine.deadline_label(&kanban("A1", "2024-05-01")), "1 Mei 2024");
        assert_eq!(engine.deadline_label(&kanban("A2", "")), "-");
    }
}
