//! Application layer: command use cases composed from the domain and ports.

mod explorer;

pub use explorer::{
    Explorer, LocationListing, RetentionOutcome, SweepReport, SweepSettings, TradeReport,
};
