//! # GBP Core
//!
//! Core library for GBP - point balances derived from work-item labels and
//! kept in a sorted, human-readable TOML ledger.
//!
//! This crate provides the pure domain logic and the storage seam, independent
//! of the CLI interface that feeds it labels and identities.
//!
//! ## Architecture
//!
//! - **config**: Label → points mapping and aggregation policy
//! - **points**: Point calculation from a label set
//! - **ledger**: Ledger line editing, bulk parsing, and format checks
//! - **store**: Load/persist seam for ledger text
//! - **award**: Load → compute → edit → persist orchestration

pub mod award;
pub mod config;
pub mod error;
pub mod fs;
pub mod identity;
pub mod ledger;
pub mod points;
pub mod store;

pub use award::{award_points, set_balance, Award};
pub use config::{CollectionMethod, PointsConfiguration};
pub use error::{GbpError, InvalidBalance, Result};
pub use identity::UserIdentity;
pub use ledger::{apply_balance, parse_ledger, BalanceTable, HEADER};
pub use points::compute_points;
pub use store::{FileLedgerStore, LedgerStore, MemoryLedgerStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
