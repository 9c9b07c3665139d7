//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP, CSV, SQLite, JSON file, terminal UI. Map errors to DomainError.

pub mod contacts;
pub mod persistence;
pub mod sentiment;
pub mod ui;
