//! # Kanban Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP adapter for the sheets endpoint
//! - A retrying HTTP client
//! - Configuration loading (environment, JSON, TOML)
//! - Conversions from external errors into `KanbanError`
//!
//! ## Architecture
//! - Implements traits defined in `kanban-core`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod sheets;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use sheets::SheetsClient;
