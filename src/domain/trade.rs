//! Single-commodity trade matching between two locations.

use serde::Serialize;

use super::commodity::{CommodityRecord, CommodityTable};

/// A commodity that can be bought at an origin and sold at a target for
/// more than it cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeOpportunity {
    pub name: String,
    /// Price paid per unit at the origin.
    pub origin_cost: i64,
    /// Units available at the origin.
    pub origin_supply: i64,
    /// Price received per unit at the target.
    pub target_revenue: i64,
    /// Units the target will buy.
    pub target_demand: i64,
    /// Per-unit profit, `target_revenue - origin_cost`.
    pub profit: i64,
}

impl TradeOpportunity {
    fn from_pair(origin: &CommodityRecord, target: &CommodityRecord) -> Self {
        Self {
            name: origin.name.clone(),
            origin_cost: origin.sell_to_player_price,
            origin_supply: origin.sell_supply,
            target_revenue: target.buy_from_player_price,
            target_demand: target.buy_demand,
            profit: target
                .buy_from_player_price
                .saturating_sub(origin.sell_to_player_price),
        }
    }

    /// Units that can actually be moved: the smaller of origin supply and
    /// target demand.
    pub fn achievable_volume(&self) -> i64 {
        self.origin_supply.min(self.target_demand).max(0)
    }

    /// Profit for a full run at the achievable volume.
    pub fn potential_profit(&self) -> i64 {
        self.profit.saturating_mul(self.achievable_volume())
    }
}

/// Lazily enumerate trades from `origin` to `target` whose per-unit profit
/// is strictly greater than `lowest_profit`.
///
/// Every origin record is paired with every target record of the same name,
/// provided the origin actually has supply. Output follows origin order,
/// then target order.
pub fn trades_above<'a>(
    origin: &'a CommodityTable,
    target: &'a CommodityTable,
    lowest_profit: i64,
) -> impl Iterator<Item = TradeOpportunity> + 'a {
    origin
        .iter()
        .filter(|o| o.is_purchasable())
        .flat_map(move |o| {
            target
                .iter()
                .filter(move |t| t.name == o.name)
                .map(move |t| TradeOpportunity::from_pair(o, t))
        })
        .filter(move |trade| trade.profit > lowest_profit)
}

/// Every profitable trade from `origin` to `target`.
pub fn match_trades(origin: &CommodityTable, target: &CommodityTable) -> Vec<TradeOpportunity> {
    trades_above(origin, target, 0).collect()
}

/// Trades from `origin` to `target` with profit above `lowest_profit`.
pub fn match_trades_above(
    origin: &CommodityTable,
    target: &CommodityTable,
    lowest_profit: i64,
) -> Vec<TradeOpportunity> {
    trades_above(origin, target, lowest_profit).collect()
}
