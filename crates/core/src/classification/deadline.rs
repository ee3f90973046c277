//! Deadline labels for Not Started cards

use kanban_domain::constants::DEADLINE_PLACEHOLDER;
use kanban_domain::{parse_date, DateLocale};
use tracing::debug;

/// Render an ordering deadline as day, full month name and year.
///
/// Never fails: empty or unparsable input renders as
/// [`DEADLINE_PLACEHOLDER`].
///
/// ```
/// use kanban_core::format_deadline;
/// use kanban_domain::DateLocale;
///
/// assert_eq!(format_deadline("2024-05-01", DateLocale::Indonesian), "1 Mei 2024");
/// assert_eq!(format_deadline("", DateLocale::Indonesian), "-");
/// ```
#[must_use]
pub fn format_deadline(raw: &str, locale: DateLocale) -> String {
    match parse_date(raw) {
        Some(date) => locale.format_date(date),
        None => {
            if !raw.trim().is_empty() {
                debug!(deadline = raw, "unparsable ordering deadline");
            }
            DEADLINE_PLACEHOLDER.to_string()
        }
    }
}
