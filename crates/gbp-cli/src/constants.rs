//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config file, ledger file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Ledger failed to parse or check.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Environment variable overriding the base path.
pub const BASE_PATH_ENV: &str = "GBP_BASE_PATH";

/// Environment variable overriding the points configuration path.
pub const CONFIG_ENV: &str = "GBP_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "GBP_LOG";

/// Environment variable selecting the log format (`compact` or `json`).
pub const LOG_FORMAT_ENV: &str = "GBP_LOG_FORMAT";

/// Points configuration location relative to the base path.
pub const DEFAULT_CONFIG_FILE: &str = ".github/gbp.toml";
