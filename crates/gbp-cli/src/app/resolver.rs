//! Path resolution for the base directory, config, and ledger.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::constants::DEFAULT_CONFIG_FILE;

/// Resolve the base path from `--base-path` / `GBP_BASE_PATH`.
///
/// `None` means the current directory.
pub fn resolve_base_path(cli: &Cli) -> Option<PathBuf> {
    cli.base_path
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Resolve the points configuration path from `--config` / `GBP_CONFIG`,
/// falling back to `.github/gbp.toml` under the base path.
pub fn resolve_config_path(cli: &Cli) -> PathBuf {
    if let Some(path) = cli.config.as_deref().filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(path);
    }
    resolve_base_path(cli)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CONFIG_FILE)
}

/// Error message when the ledger file is missing.
pub fn missing_ledger_message(path: &Path) -> String {
    format!(
        "No ledger found at {}\n\nRun:\n  gbp award --user-id <ID> --login <LOGIN> --label <LABEL>\n\nOr point at an existing repository:\n  GBP_BASE_PATH=/path/to/repo gbp check",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_defaults_under_base_path() {
        let cli = Cli::try_parse_from(["gbp", "--base-path", "/repo", "show"]).unwrap();
        assert_eq!(resolve_config_path(&cli), PathBuf::from("/repo/.github/gbp.toml"));
    }

    #[test]
    fn test_explicit_config_wins() {
        let cli = Cli::try_parse_from(["gbp", "-b", "/repo", "-c", "/etc/gbp.toml", "show"]).unwrap();
        assert_eq!(resolve_config_path(&cli), PathBuf::from("/etc/gbp.toml"));
    }

    #[test]
    fn test_blank_base_path_is_current_dir() {
        let cli = Cli::try_parse_from(["gbp", "--base-path", " ", "show"]).unwrap();
        assert_eq!(resolve_base_path(&cli), None);
    }
}
