//! Application constants
//!
//! Centralized location for domain-level constants shared by the engine,
//! the sheet adapters and the presentation helpers.

// Sheet worksheets
pub const KANBAN_WORKSHEET: &str = "KANBAN_INTERNAL";
pub const TRACKING_WORKSHEET: &str = "KANBAN_TRACKING";
pub const SHEETS_API_PATH: &str = "/api/sheets";

// Raw tag values as written by the system of record
pub const TIPE_KANBAN_INTERNAL: &str = "INTERNAL";
pub const STATUS_PO_SUBMITTED: &str = "PO Diajukan";
pub const STATUS_RECEIVED: &str = "Sudah Diterima";

// Deadline rendering
pub const DEADLINE_PLACEHOLDER: &str = "-";
pub const DEFAULT_LOCALE: &str = "id-ID";

// Purchase-request navigation
pub const DEFAULT_FORM_PATH: &str = "/form-pr";

// HTTP defaults
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
