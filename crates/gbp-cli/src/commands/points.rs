use gbp_core::compute_points;

use crate::app::AppContext;
use crate::cli::PointsArgs;

pub fn handle_points(ctx: &AppContext, args: &PointsArgs) -> anyhow::Result<()> {
    let config = ctx.points_config()?;
    let points = compute_points(config, args.labels.as_slice());

    if args.json {
        let output = serde_json::json!({
            "points": points,
            "collection_method": config.method(),
            "labels": args.labels,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", points);
    }
    Ok(())
}
