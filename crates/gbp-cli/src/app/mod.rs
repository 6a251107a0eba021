//! Application-level utilities for the GBP CLI.
//!
//! This module provides:
//! - Path resolution for the base directory, configuration, and ledger
//! - A context bundling CLI args with the resolved ledger store

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::missing_ledger_message;
