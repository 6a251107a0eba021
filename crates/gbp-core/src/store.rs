//! Ledger store trait and implementations.
//!
//! The store is the only place ledger text touches the outside world. Point
//! calculation and ledger editing never see it; callers pass a store into
//! [`crate::award`] explicitly.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::error::{GbpError, Result};
use crate::fs::write_atomic;
use crate::ledger::balance_path;

/// Load/persist seam for ledger text.
///
/// Implementations do not serialize concurrent writers; callers run one
/// update at a time per ledger.
pub trait LedgerStore: Send + Sync {
    /// Load the current ledger text.
    ///
    /// Returns `None` when there is no ledger yet. A ledger that cannot be
    /// read is treated the same way, so the next persist recreates it.
    fn load(&self) -> Option<String>;

    /// Replace the ledger text wholesale.
    ///
    /// # Errors
    ///
    /// Returns `GbpError::Storage` if the text could not be written.
    fn persist(&self, contents: &str) -> Result<()>;
}

/// Ledger kept in a file on disk.
#[derive(Debug, Clone)]
pub struct FileLedgerStore {
    path: PathBuf,
}

impl FileLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default ledger location under `base`.
    pub fn at(base: Option<&Path>) -> Self {
        Self::new(balance_path(base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for FileLedgerStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                debug!(path = %self.path.display(), bytes = text.len(), "loaded ledger");
                Some(text)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no ledger yet");
                None
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ledger unreadable, treating as absent");
                None
            }
        }
    }

    fn persist(&self, contents: &str) -> Result<()> {
        write_atomic(&self.path, contents).map_err(|e| {
            GbpError::Storage(format!(
                "Failed to write ledger {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), bytes = contents.len(), "persisted ledger");
        Ok(())
    }
}

/// Ledger kept in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    contents: Mutex<Option<String>>,
    reject_writes: bool,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
            reject_writes: false,
        }
    }

    /// A store whose persists always fail.
    pub fn read_only(contents: Option<String>) -> Self {
        Self {
            contents: Mutex::new(contents),
            reject_writes: true,
        }
    }

    /// Current contents.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn load(&self) -> Option<String> {
        self.contents()
    }

    fn persist(&self, contents: &str) -> Result<()> {
        if self.reject_writes {
            return Err(GbpError::Storage("ledger store is read-only".to_string()));
        }
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(contents.to_string());
        Ok(())
    }
}
