//! JSON output formatting for balances.

use gbp_core::BalanceTable;
use serde::Serialize;

/// One ledger balance as emitted by `gbp show --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceRow {
    pub id: String,
    pub balance: i64,
}

/// Convert a balance table to JSON rows, ordered numerically by ID.
pub fn balances_json(table: &BalanceTable) -> Vec<BalanceRow> {
    let mut rows: Vec<BalanceRow> = table
        .iter()
        .map(|(id, balance)| BalanceRow {
            id: id.clone(),
            balance: *balance,
        })
        .collect();
    rows.sort_by_key(|row| (row.id.parse::<u64>().ok(), row.id.clone()));
    rows
}
