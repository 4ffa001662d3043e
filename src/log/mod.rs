//! Logging and observability
//!
//! JSONL history of commands run under an indicator.

pub mod history;

pub use history::{HistoryLog, RunRecord};
