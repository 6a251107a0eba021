//! Application context for the GBP CLI.
//!
//! Bundles CLI arguments with the ledger store and the lazily-loaded points
//! configuration so handlers take a single parameter.

use std::path::Path;

use once_cell::unsync::OnceCell;

use gbp_core::{FileLedgerStore, PointsConfiguration};

use crate::cli::Cli;
use crate::config::read_points_config;

use super::resolver::{resolve_base_path, resolve_config_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    store: FileLedgerStore,
    points_config: OnceCell<PointsConfiguration>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        let base = resolve_base_path(cli);
        Self {
            cli,
            store: FileLedgerStore::at(base.as_deref()),
            points_config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The ledger store for this run.
    pub fn store(&self) -> &FileLedgerStore {
        &self.store
    }

    pub fn ledger_path(&self) -> &Path {
        self.store.path()
    }

    /// Get the points configuration, loading it on first use.
    pub fn points_config(&self) -> anyhow::Result<&PointsConfiguration> {
        self.points_config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli);
            tracing::debug!(path = %path.display(), "loading points configuration");
            read_points_config(&path)
        })
    }
}
