//! Handler for the `ferengi` all-pairs sweep.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::FerengiArgs;
use crate::adapter::inbound::cli::output::Output;
use crate::application::{Explorer, SweepSettings};
use crate::domain::{best_per_unit, best_potential, Location, SweepHit};
use crate::error::{ConfigError, Result};

#[derive(Tabled)]
struct SweepRow {
    #[tabled(rename = "Origin")]
    origin: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Commodity")]
    name: String,
    #[tabled(rename = "Cost (Cr)")]
    cost: i64,
    #[tabled(rename = "Supply (t)")]
    supply: i64,
    #[tabled(rename = "Sell @ (Cr)")]
    revenue: i64,
    #[tabled(rename = "Demand (t)")]
    demand: i64,
    #[tabled(rename = "Profit")]
    profit: i64,
}

impl From<&SweepHit> for SweepRow {
    fn from(hit: &SweepHit) -> Self {
        Self {
            origin: hit.origin.to_string(),
            target: hit.target.to_string(),
            name: hit.trade.name.clone(),
            cost: hit.trade.origin_cost,
            supply: hit.trade.origin_supply,
            revenue: hit.trade.target_revenue,
            demand: hit.trade.target_demand,
            profit: hit.trade.profit,
        }
    }
}

/// Configured sweep settings with the command-line overrides applied.
fn sweep_settings(args: &FerengiArgs, configured: &SweepSettings) -> Result<SweepSettings> {
    let lowest_profit = args.lowest_profit.unwrap_or(configured.lowest_profit);
    if lowest_profit < 0 {
        return Err(ConfigError::InvalidValue {
            field: "lowest_profit",
            reason: "must be zero or greater".to_string(),
        }
        .into());
    }
    let excluded_origins = if args.exclude.is_empty() {
        configured.excluded_origins.clone()
    } else {
        args.exclude.iter().map(Location::new).collect()
    };
    Ok(SweepSettings {
        lowest_profit,
        excluded_origins,
    })
}

/// Sweep every pair of visited locations for high-profit trades.
pub fn execute(
    explorer: &Explorer<'_>,
    output: &Output,
    args: &FerengiArgs,
    configured: &SweepSettings,
) -> Result<()> {
    let settings = sweep_settings(args, configured)?;
    let report = explorer.sweep(&settings)?;

    if output.is_json() {
        return output.json(&json!({
            "command": "ferengi",
            "lowest_profit": settings.lowest_profit,
            "excluded_origins": settings.excluded_origins,
            "hits": report.hits,
        }));
    }

    output.section(&format!(
        "Trades above {} Cr across {} locations",
        settings.lowest_profit, report.locations
    ));
    if report.hits.is_empty() {
        output.note("no trades found");
        output.hint("try a lower --lowest-profit");
        return Ok(());
    }
    output.table(report.hits.iter().map(SweepRow::from));

    if let Some(best) = best_per_unit(&report.hits) {
        output.field(
            "best/unit",
            format!(
                "{} {} → {} at {} Cr/t",
                best.trade.name,
                best.origin,
                best.target,
                output.positive(best.trade.profit)
            ),
        );
    }
    if let Some(best) = best_potential(&report.hits) {
        output.field(
            "best/run",
            format!(
                "{} {} → {}: {} t for {} Cr",
                best.trade.name,
                best.origin,
                best.target,
                best.trade.achievable_volume(),
                output.positive(best.trade.potential_profit())
            ),
        );
    }
    output.hint("per-unit profit ignores volume; check supply and demand before flying");
    Ok(())
}
