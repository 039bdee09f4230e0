//! Handlers for the `buy` and `sell` single-location reports.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::output::Output;
use crate::application::Explorer;
use crate::error::Result;

#[derive(Tabled)]
struct ForSaleRow {
    #[tabled(rename = "Commodity")]
    name: String,
    #[tabled(rename = "Price (Cr)")]
    price: i64,
    #[tabled(rename = "Supply (t)")]
    supply: i64,
}

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Commodity")]
    name: String,
    #[tabled(rename = "Price (Cr)")]
    price: i64,
    #[tabled(rename = "Demand (t)")]
    demand: i64,
}

/// List goods a player can buy at a location.
pub fn buy(explorer: &Explorer<'_>, output: &Output, snippet: &str) -> Result<()> {
    let listing = explorer.goods_for_sale(snippet)?;

    if output.is_json() {
        return output.json(&json!({
            "command": "buy",
            "location": listing.location,
            "records": listing.records,
        }));
    }

    output.section(&format!(
        "For sale at {}",
        output.highlight(&listing.location)
    ));
    if listing.records.is_empty() {
        output.note("nothing for sale");
        return Ok(());
    }
    output.table(listing.records.iter().map(|record| ForSaleRow {
        name: record.name.clone(),
        price: record.sell_to_player_price,
        supply: record.sell_supply,
    }));
    Ok(())
}

/// List what a location buys and at which price.
pub fn sell(explorer: &Explorer<'_>, output: &Output, snippet: &str) -> Result<()> {
    let listing = explorer.goods_prices(snippet)?;

    if output.is_json() {
        return output.json(&json!({
            "command": "sell",
            "location": listing.location,
            "records": listing.records,
        }));
    }

    output.section(&format!(
        "Station buy prices at {}",
        output.highlight(&listing.location)
    ));
    output.table(listing.records.iter().map(|record| PriceRow {
        name: record.name.clone(),
        price: record.buy_from_player_price,
        demand: record.buy_demand,
    }));
    Ok(())
}
