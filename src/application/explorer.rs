//! Command use cases over a snapshot store.
//!
//! [`Explorer`] is what the CLI handlers talk to. Each call re-derives the
//! catalog from the store, so nothing is cached between commands.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    match_trades, ArbitrageSweep, CommodityRecord, CommodityTable, DomainError, Location,
    LocationResolver, Markets, SnapshotCatalog, SnapshotId, SnapshotKind, SweepHit,
    TradeOpportunity, DEFAULT_EXCLUDED_ORIGIN, DEFAULT_LOWEST_PROFIT,
};
use crate::error::{Error, Result};
use crate::port::{Reporter, SnapshotStore};

/// Result of a retention pass over both snapshot families.
#[derive(Debug, Default)]
pub struct RetentionOutcome {
    /// Most recent snapshot per location and kind.
    pub kept: Vec<SnapshotId>,
    /// Obsolete snapshots that were removed (or would be, on a dry run).
    pub removed: Vec<SnapshotId>,
    /// Obsolete snapshots whose removal failed.
    pub failed: Vec<(SnapshotId, Error)>,
}

impl RetentionOutcome {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Commodity records of one resolved location.
#[derive(Debug, Clone, Serialize)]
pub struct LocationListing {
    pub location: Location,
    pub records: Vec<CommodityRecord>,
}

/// Profitable trades between two resolved locations.
#[derive(Debug, Clone, Serialize)]
pub struct TradeReport {
    pub origin: Location,
    pub target: Location,
    pub trades: Vec<TradeOpportunity>,
}

/// Threshold and exclusions for the all-pairs sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepSettings {
    /// Minimum per-unit profit, exclusive.
    pub lowest_profit: i64,
    /// Locations that never act as an origin.
    pub excluded_origins: Vec<Location>,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            lowest_profit: DEFAULT_LOWEST_PROFIT,
            excluded_origins: vec![Location::from(DEFAULT_EXCLUDED_ORIGIN)],
        }
    }
}

/// Every hit of one sweep, in origin-major order.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Number of markets swept.
    pub locations: usize,
    pub hits: Vec<SweepHit>,
}

/// Use cases behind every command.
pub struct Explorer<'a> {
    store: &'a dyn SnapshotStore,
    reporter: &'a dyn Reporter,
}

impl<'a> Explorer<'a> {
    pub fn new(store: &'a dyn SnapshotStore, reporter: &'a dyn Reporter) -> Self {
        Self { store, reporter }
    }

    /// Index the store's current contents.
    pub fn catalog(&self) -> Result<SnapshotCatalog> {
        let names = self.store.names()?;
        let catalog = SnapshotCatalog::from_names(&names, self.reporter);
        debug!(
            snapshots = catalog.all().len(),
            ignored = catalog.ignored().len(),
            "built snapshot catalog"
        );
        Ok(catalog)
    }

    /// Every snapshot file, CSV family first, each family sorted by name.
    pub fn snapshots(&self) -> Result<Vec<SnapshotId>> {
        let catalog = self.catalog()?;
        let mut snapshots = Vec::new();
        for kind in SnapshotKind::ALL {
            let mut ids: Vec<SnapshotId> = catalog.snapshots(kind).cloned().collect();
            ids.sort_by(|a, b| a.file_name().cmp(b.file_name()));
            snapshots.extend(ids);
        }
        Ok(snapshots)
    }

    /// Known locations, sorted ascending.
    pub fn visited(&self) -> Result<Vec<Location>> {
        Ok(self.catalog()?.list_locations())
    }

    /// Keep only the most recent snapshot per location in each family.
    ///
    /// Deletion is best effort: a file that cannot be removed is reported
    /// and recorded in [`RetentionOutcome::failed`], and the pass carries on.
    /// With `dry_run` nothing is deleted.
    pub fn clean(&self, dry_run: bool) -> Result<RetentionOutcome> {
        let catalog = self.catalog()?;
        let mut outcome = RetentionOutcome::default();

        for kind in SnapshotKind::ALL {
            let (latest, obsolete) = catalog.retention_plan(kind).into_parts();
            for id in latest.into_values() {
                self.reporter.debug(&format!("Keeping most recent: {id}"));
                outcome.kept.push(id);
            }
            for id in obsolete {
                if dry_run {
                    outcome.removed.push(id);
                    continue;
                }
                match self.store.remove(id.file_name()) {
                    Ok(()) => {
                        info!(file = id.file_name(), "removed obsolete snapshot");
                        self.reporter.debug(&format!("Removing: {id}"));
                        outcome.removed.push(id);
                    }
                    Err(err) => {
                        warn!(file = id.file_name(), error = %err, "could not remove obsolete snapshot");
                        self.reporter.error(&err.to_string());
                        outcome.failed.push((id, err));
                    }
                }
            }
        }

        Ok(outcome)
    }

    /// Resolve a snippet against the catalog's known locations.
    pub fn resolve(&self, catalog: &SnapshotCatalog, snippet: &str) -> Result<Location> {
        let locations = catalog.list_locations();
        Ok(LocationResolver::new(self.reporter).resolve(snippet, &locations)?)
    }

    /// Load the commodity table of `location` from its single CSV snapshot.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingSnapshot`] when the location has no CSV snapshot
    /// - [`DomainError::MultipleSnapshots`] when retention has not run and
    ///   more than one remains
    /// - [`DomainError::MalformedRecord`] when a line fails to parse
    pub fn load_table(&self, catalog: &SnapshotCatalog, location: &Location) -> Result<CommodityTable> {
        let mut candidates: Vec<&SnapshotId> =
            catalog.snapshots_for(location, SnapshotKind::Csv).collect();

        let snapshot = match candidates.len() {
            0 => {
                return Err(DomainError::MissingSnapshot {
                    location: location.clone(),
                }
                .into())
            }
            1 => candidates[0],
            _ => {
                candidates.sort_by(|a, b| a.file_name().cmp(b.file_name()));
                return Err(DomainError::MultipleSnapshots {
                    location: location.clone(),
                    files: candidates.iter().map(|id| id.file_name().to_string()).collect(),
                }
                .into());
            }
        };

        self.reporter
            .debug(&format!("Reading data from file: {snapshot}"));
        let lines = self.store.read_lines(snapshot.file_name())?;
        let table = CommodityTable::parse_snapshot(&lines).map_err(|source| {
            Error::from(DomainError::MalformedRecord {
                file: snapshot.file_name().to_string(),
                source,
            })
        })?;
        debug!(location = %location, records = table.len(), "loaded commodity table");
        Ok(table)
    }

    /// Commodities a player can buy at the location matching `snippet`.
    pub fn goods_for_sale(&self, snippet: &str) -> Result<LocationListing> {
        let catalog = self.catalog()?;
        let location = self.resolve(&catalog, snippet)?;
        let table = self.load_table(&catalog, &location)?;
        Ok(LocationListing {
            location,
            records: table.purchasable().cloned().collect(),
        })
    }

    /// Every commodity record at the location matching `snippet`.
    pub fn goods_prices(&self, snippet: &str) -> Result<LocationListing> {
        let catalog = self.catalog()?;
        let location = self.resolve(&catalog, snippet)?;
        let table = self.load_table(&catalog, &location)?;
        Ok(LocationListing {
            location,
            records: table.records().to_vec(),
        })
    }

    /// Profitable trades between two locations.
    ///
    /// Runs a retention pass first so each location has a single snapshot
    /// to read.
    pub fn trade2(&self, origin: &str, target: &str) -> Result<TradeReport> {
        debug!(origin, target, "trade2");
        let retention = self.clean(false)?;
        if !retention.removed.is_empty() {
            self.reporter.info(&format!(
                "removed {} obsolete snapshot(s)",
                retention.removed.len()
            ));
        }

        let catalog = self.catalog()?;
        let origin = self.resolve(&catalog, origin)?;
        let target = self.resolve(&catalog, target)?;
        let origin_table = self.load_table(&catalog, &origin)?;
        let target_table = self.load_table(&catalog, &target)?;

        let trades = match_trades(&origin_table, &target_table);
        debug!(origin = %origin, target = %target, trades = trades.len(), "matched trades");
        Ok(TradeReport {
            origin,
            target,
            trades,
        })
    }

    /// Commodity tables for every known location.
    ///
    /// Fails on the first location that cannot be loaded, so a sweep never
    /// runs over an incomplete set of markets.
    pub fn markets(&self) -> Result<Markets> {
        let catalog = self.catalog()?;
        let mut markets = Markets::new();
        for location in catalog.list_locations() {
            let table = self.load_table(&catalog, &location)?;
            markets.insert(location, table);
        }
        Ok(markets)
    }

    /// Sweep every ordered pair of known locations for trades above the
    /// threshold.
    pub fn sweep(&self, settings: &SweepSettings) -> Result<SweepReport> {
        let markets = self.markets()?;
        let hits: Vec<SweepHit> =
            ArbitrageSweep::new(&markets, settings.lowest_profit, &settings.excluded_origins)
                .hits()
                .collect();
        debug!(
            locations = markets.len(),
            lowest_profit = settings.lowest_profit,
            hits = hits.len(),
            "sweep finished"
        );
        Ok(SweepReport {
            locations: markets.len(),
            hits,
        })
    }
}
