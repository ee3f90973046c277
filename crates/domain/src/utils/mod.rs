//! Parsing and formatting helpers shared by the record types

pub mod date;
pub mod lenient;
pub mod purchase_request;
