//! Bulk read of a ledger into a balance table.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{GbpError, InvalidBalance, Result};

/// User ID (as written in the ledger) → balance.
pub type BalanceTable = BTreeMap<String, i64>;

/// Parse ledger text into a validated balance table.
///
/// The text is decoded as an untyped TOML table first; every value must then
/// be an integer. Nothing is returned unless the whole table validates.
///
/// # Errors
///
/// - `GbpError::Parse` if the text is not TOML
/// - `GbpError::Validation` listing every key whose value is not an integer
pub fn parse_ledger(text: &str) -> Result<BalanceTable> {
    let raw: toml::Table = toml::from_str(text)?;

    let mut table = BalanceTable::new();
    let mut offending = Vec::new();
    for (key, value) in raw {
        match value {
            toml::Value::Integer(balance) => {
                table.insert(key, balance);
            }
            other => offending.push(InvalidBalance {
                key,
                value: other.to_string(),
            }),
        }
    }

    if !offending.is_empty() {
        return Err(GbpError::Validation { offending });
    }

    debug!(records = table.len(), "parsed ledger");
    Ok(table)
}

/// Balance recorded for a user ID, if any.
pub fn balance_of(table: &BalanceTable, id: u64) -> Option<i64> {
    table.get(&id.to_string()).copied()
}
