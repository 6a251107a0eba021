use gbp_core::ledger::check_ledger;
use gbp_core::LedgerStore;

use crate::app::{missing_ledger_message, AppContext};
use crate::cli::CheckArgs;
use crate::errors::{from_core, CliError};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let text = ctx.store().load().ok_or_else(|| {
        CliError::not_found(
            missing_ledger_message(ctx.ledger_path()),
            "Hint: The ledger is created by the first `gbp award` or `gbp set`.",
        )
    })?;

    let report = check_ledger(&text).map_err(from_core)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if !report.is_ok() {
        if !args.json {
            eprintln!("Ledger check: FAILED");
            for issue in &report.issues {
                eprintln!("- {}", issue);
            }
        }
        return Err(CliError::integrity_failed(format!(
            "Ledger check failed with {} issue(s)",
            report.issues.len()
        ))
        .into());
    }

    if !args.json && !ctx.quiet() {
        println!("Ledger check: OK");
        println!("- path: {}", ctx.ledger_path().display());
        println!("- records: {}", report.records);
    }
    Ok(())
}
