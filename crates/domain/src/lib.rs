//! # Kanban Domain
//!
//! Business domain types for the spare-part kanban board.
//!
//! This crate contains:
//! - Kanban and tracking record types as delivered by the sheets endpoint
//! - Closed lifecycle tags (`TrackingStatus`, `KanbanType`)
//! - Board, lane and snapshot types
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::date::{parse_date, DateLocale};
pub use utils::purchase_request::PurchaseRequestLink;
