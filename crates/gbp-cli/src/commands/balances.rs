//! Direct balance reads and writes.

use gbp_core::{parse_ledger, set_balance, LedgerStore};

use crate::app::AppContext;
use crate::cli::{SetArgs, ShowArgs};
use crate::errors::from_core;
use crate::output::{balance_table, balances_json, OutputMode};

use super::user_from_args;

pub fn handle_set(ctx: &AppContext, args: &SetArgs) -> anyhow::Result<()> {
    let user = user_from_args(&args.user)?;
    set_balance(ctx.store(), &user, args.balance).map_err(from_core)?;

    if !ctx.quiet() {
        println!("{}: {}", user.login(), args.balance);
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let mode = OutputMode::detect(args.json, args.format.as_deref())?;

    let table = match ctx.store().load() {
        Some(text) => parse_ledger(&text).map_err(from_core)?,
        None => Default::default(),
    };
    let rows = balances_json(&table);

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputMode::Table => {
            if rows.is_empty() {
                if !ctx.quiet() {
                    println!("No balances yet.");
                }
            } else {
                println!("{}", balance_table(&rows));
            }
        }
        OutputMode::Plain => {
            for row in &rows {
                println!("{} {}", row.id, row.balance);
            }
        }
    }
    Ok(())
}
