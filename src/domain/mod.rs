//! Snapshot retention and cross-location trade matching.
//!
//! Everything here is pure: no file access, no global state. User-facing
//! notices go through the [`Reporter`](crate::port::Reporter) handed in by
//! the caller.

mod catalog;
mod commodity;
mod error;
mod location;
mod resolver;
mod snapshot;
mod sweep;
mod trade;

pub use catalog::{RetentionPlan, SnapshotCatalog};
pub use commodity::{CommodityRecord, CommodityTable, RecordError, RecordErrorKind, REQUIRED_FIELDS};
pub use error::DomainError;
pub use location::Location;
pub use resolver::LocationResolver;
pub use snapshot::{SnapshotId, SnapshotKind, Timestamp};
pub use sweep::{
    best_per_unit, best_potential, ArbitrageSweep, Markets, SweepHit, DEFAULT_EXCLUDED_ORIGIN,
    DEFAULT_LOWEST_PROFIT,
};
pub use trade::{match_trades, match_trades_above, trades_above, TradeOpportunity};
