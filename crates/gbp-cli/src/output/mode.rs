//! Output mode routing logic.

use std::io::IsTerminal;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Bordered table (TTY only)
    Table,
}

impl OutputMode {
    /// Resolve output mode from flags.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything
    /// 2. `--format plain|table` is honored as given
    /// 3. Otherwise a table on a TTY, plain elsewhere
    pub fn resolve(json_flag: bool, format_flag: Option<&str>, is_tty: bool) -> anyhow::Result<Self> {
        if json_flag {
            if format_flag.is_some() {
                return Err(anyhow::anyhow!("--format cannot be used with --json"));
            }
            return Ok(Self::Json);
        }

        match format_flag {
            Some("plain") => Ok(Self::Plain),
            Some("table") => Ok(Self::Table),
            Some(other) => Err(anyhow::anyhow!(
                "Invalid format: {} (use table or plain)",
                other
            )),
            None if is_tty => Ok(Self::Table),
            None => Ok(Self::Plain),
        }
    }

    /// Resolve against the real stdout.
    pub fn detect(json_flag: bool, format_flag: Option<&str>) -> anyhow::Result<Self> {
        Self::resolve(json_flag, format_flag, std::io::stdout().is_terminal())
    }
}
