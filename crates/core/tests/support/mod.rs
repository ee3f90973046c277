//! Shared test helpers for `kanban-core` integration tests.
//!
//! In-memory record sources and sheet fixtures so refresh tests can focus
//! on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod sources;
