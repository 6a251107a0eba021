//! Points configuration loading for the CLI.

use std::path::Path;

use gbp_core::PointsConfiguration;

use crate::errors::{from_core, CliError};

/// Read and decode a points configuration file.
pub fn read_points_config(path: &Path) -> anyhow::Result<PointsConfiguration> {
    if !path.exists() {
        return Err(CliError::not_found(
            format!("No points configuration found at {}", path.display()),
            "Hint: Create it with a [points] table, or pass --config / set GBP_CONFIG.",
        )
        .into());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    PointsConfiguration::from_toml_str(&contents).map_err(from_core)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;
    use gbp_core::CollectionMethod;
    use tempfile::tempdir;

    #[test]
    fn test_read_points_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gbp.toml");
        std::fs::write(&path, "collection_method = \"sum\"\n[points]\nbug = -2\n").unwrap();

        let config = read_points_config(&path).unwrap();
        assert_eq!(config.method(), CollectionMethod::Sum);
        assert_eq!(config.value_of("bug"), Some(-2));
    }

    #[test]
    fn test_missing_config_is_not_found() {
        let dir = tempdir().unwrap();
        let err = read_points_config(&dir.path().join("missing.toml")).unwrap_err();
        let cli = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_bad_config_is_invalid_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gbp.toml");
        std::fs::write(&path, "collection_method = \"median\"\n").unwrap();

        let err = read_points_config(&path).unwrap_err();
        let cli = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli.exit_code(), exit_codes::INVALID_INPUT);
    }
}
