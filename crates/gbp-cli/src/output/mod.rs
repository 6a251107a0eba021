//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying balances
//! in various formats (JSON, table, plain text).

mod json;
mod mode;
mod text;

// Re-export public API
pub use json::balances_json;
pub use mode::OutputMode;
pub use text::{balance_table, format_delta};
