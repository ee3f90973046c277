//! Board classification domain

pub mod deadline;
pub mod engine;

pub use deadline::format_deadline;
pub use engine::*;
