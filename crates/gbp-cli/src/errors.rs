//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use gbp_core::GbpError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, ledger)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Ledger is corrupt or violates the generated format
    IntegrityFailed { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::IntegrityFailed { message, hint } => write!(f, "{}\n{}", message, hint),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create an IntegrityFailed error with the standard hint.
    pub fn integrity_failed(message: impl Into<String>) -> Self {
        CliError::IntegrityFailed {
            message: message.into(),
            hint: "Hint: Fix the ledger by hand (IDs ascending, `<id> = <balance> # <login>`) \
                   or restore it from version control."
                .to_string(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::IntegrityFailed { .. } => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Map a core error onto the CLI error it should surface as.
pub fn from_core(err: GbpError) -> anyhow::Error {
    match err {
        GbpError::Parse(_) | GbpError::Validation { .. } => {
            CliError::integrity_failed(format!("Ledger is corrupt: {}", err)).into()
        }
        GbpError::Config(_) | GbpError::InvalidIdentity(_) => {
            CliError::invalid_input(err.to_string()).into()
        }
        other => other.into(),
    }
}
