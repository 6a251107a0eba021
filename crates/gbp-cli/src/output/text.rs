//! Text and table output formatting for balances.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::json::BalanceRow;

/// Render balances as a bordered table.
pub fn balance_table(rows: &[BalanceRow]) -> String {
    let mut table = ComfyTable::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["User ID", "Balance"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.id),
            Cell::new(row.balance).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

/// Signed rendering of a point delta (`+5`, `-2`, `0`).
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}
