//! All-pairs arbitrage sweep ("ferengi").
//!
//! The sweep runs trade matching over every ordered pair of known locations
//! and streams every opportunity above a profit threshold. It does not rank
//! its output; [`best_per_unit`] and [`best_potential`] pick from a collected
//! run.

use std::collections::BTreeMap;

use serde::Serialize;

use super::commodity::CommodityTable;
use super::location::Location;
use super::trade::{trades_above, TradeOpportunity};

/// Default minimum per-unit profit for the sweep, in credits.
pub const DEFAULT_LOWEST_PROFIT: i64 = 500;

/// Permanently stocked hub that is never interesting as an origin.
pub const DEFAULT_EXCLUDED_ORIGIN: &str = "Shinrarta Dezhra.Jameson Memorial";

/// Commodity tables for every known location, ordered by location.
#[derive(Debug, Clone, Default)]
pub struct Markets {
    tables: BTreeMap<Location, CommodityTable>,
}

impl Markets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: Location, table: CommodityTable) {
        self.tables.insert(location, table);
    }

    pub fn get(&self, location: &Location) -> Option<&CommodityTable> {
        self.tables.get(location)
    }

    /// Known locations, sorted ascending.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.tables.keys()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<(Location, CommodityTable)> for Markets {
    fn from_iter<T: IntoIterator<Item = (Location, CommodityTable)>>(iter: T) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

/// One opportunity found by the sweep, tagged with its location pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepHit {
    pub origin: Location,
    pub target: Location,
    pub trade: TradeOpportunity,
}

/// Sweep parameters bound to a set of markets.
#[derive(Debug, Clone, Copy)]
pub struct ArbitrageSweep<'a> {
    markets: &'a Markets,
    lowest_profit: i64,
    excluded_origins: &'a [Location],
}

impl<'a> ArbitrageSweep<'a> {
    pub fn new(markets: &'a Markets, lowest_profit: i64, excluded_origins: &'a [Location]) -> Self {
        Self {
            markets,
            lowest_profit,
            excluded_origins,
        }
    }

    /// Ordered `(origin, target)` pairs the sweep visits: every pair of
    /// distinct locations whose origin is not excluded.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a Location, &'a Location)> + 'a {
        let markets = self.markets;
        let excluded = self.excluded_origins;
        markets
            .locations()
            .filter(move |origin| !excluded.contains(origin))
            .flat_map(move |origin| {
                markets
                    .locations()
                    .filter(move |target| *target != origin)
                    .map(move |target| (origin, target))
            })
    }

    /// Lazily stream every opportunity above the threshold, origin-major.
    pub fn hits(&self) -> impl Iterator<Item = SweepHit> + 'a {
        let markets = self.markets;
        let lowest_profit = self.lowest_profit;
        self.pairs().flat_map(move |(origin, target)| {
            let origin_table = markets.get(origin);
            let target_table = markets.get(target);
            origin_table
                .zip(target_table)
                .into_iter()
                .flat_map(move |(o, t)| trades_above(o, t, lowest_profit))
                .map(move |trade| SweepHit {
                    origin: origin.clone(),
                    target: target.clone(),
                    trade,
                })
        })
    }
}

/// The hit with the highest per-unit profit; the first one on ties.
pub fn best_per_unit(hits: &[SweepHit]) -> Option<&SweepHit> {
    first_max_by_key(hits, |hit| hit.trade.profit)
}

/// The hit with the highest profit at achievable volume; the first one on
/// ties.
pub fn best_potential(hits: &[SweepHit]) -> Option<&SweepHit> {
    first_max_by_key(hits, |hit| hit.trade.potential_profit())
}

fn first_max_by_key<T>(items: &[T], key: impl Fn(&T) -> i64) -> Option<&T> {
    items
        .iter()
        .reduce(|best, item| if key(item) > key(best) { item } else { best })
}
