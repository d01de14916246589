//! Infrastructure adapters. Implement outbound ports and drive the inbound one.
//!
//! Catalogs, name tables, score files, terminal UI. Map errors to DomainError.

pub mod catalog;
pub mod names;
pub mod scores;
pub mod ui;
