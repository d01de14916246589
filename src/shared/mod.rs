//! Cross-cutting application support.

pub mod config;
