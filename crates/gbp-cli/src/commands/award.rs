use gbp_core::award_points;

use crate::app::AppContext;
use crate::cli::AwardArgs;
use crate::errors::from_core;
use crate::output::format_delta;

use super::user_from_args;

pub fn handle_award(ctx: &AppContext, args: &AwardArgs) -> anyhow::Result<()> {
    let user = user_from_args(&args.user)?;
    let config = ctx.points_config()?;

    let award =
        award_points(ctx.store(), config, args.labels.as_slice(), &user).map_err(from_core)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&award)?);
    } else if !ctx.quiet() {
        println!(
            "{}: {} -> {} ({})",
            user.login(),
            award.previous,
            award.balance,
            format_delta(award.delta)
        );
    }
    Ok(())
}
