//! Core types shared by the recurtext crates.
//!
//! - `rule`: the recurrence `Options` model and its canonical RRULE codec
//! - `config`: settings loaded from the environment and `recurtext.toml`
//! - `error`: the crate-level error type

pub mod config;
pub mod error;
pub mod rule;
