//! # Kanban App
//!
//! Composition root for the spare-part kanban board: wires the HTTP record
//! sources into the board service and renders snapshots for display.

pub mod context;
pub mod utils;
pub mod view;

pub use context::AppContext;
pub use view::BoardView;
