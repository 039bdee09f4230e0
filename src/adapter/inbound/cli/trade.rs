//! Handler for the `trade2` command.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::output::Output;
use crate::application::Explorer;
use crate::domain::TradeOpportunity;
use crate::error::Result;

#[derive(Tabled)]
pub(crate) struct TradeRow {
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

impl From<&TradeOpportunity> for TradeRow {
    fn from(trade: &TradeOpportunity) -> Self {
        Self {
            name: trade.name.clone(),
            cost: trade.origin_cost,
            supply: trade.origin_supply,
            revenue: trade.target_revenue,
            demand: trade.target_demand,
            profit: trade.profit,
        }
    }
}

/// List profitable trades between two locations.
pub fn execute(explorer: &Explorer<'_>, output: &Output, origin: &str, target: &str) -> Result<()> {
    let report = explorer.trade2(origin, target)?;

    if output.is_json() {
        return output.json(&json!({
            "command": "trade2",
            "origin": report.origin,
            "target": report.target,
            "trades": report.trades,
        }));
    }

    output.section(&format!(
        "{} → {}",
        output.highlight(&report.origin),
        output.highlight(&report.target)
    ));
    if report.trades.is_empty() {
        output.note("no profitable trades");
        return Ok(());
    }
    output.table(report.trades.iter().map(TradeRow::from));
    Ok(())
}
