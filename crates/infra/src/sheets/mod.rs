//! Sheets endpoint adapter

pub mod client;

pub use client::SheetsClient;
