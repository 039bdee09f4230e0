//! eddep - Elite Dangerous data explorer.
//!
//! Housekeeping and trade planning over the market snapshots a market
//! connector writes for every station a commander docks at.
//!
//! # Architecture
//!
//! - **`domain`** - Pure logic: snapshot identities, retention, commodity
//!   tables, location resolution, trade matching and the all-pairs sweep
//! - **`port`** - Traits at the edges: [`port::SnapshotStore`] and
//!   [`port::Reporter`]
//! - **`adapter`** - The filesystem store, the tracing reporter and the CLI
//! - **`application`** - Command use cases composed from the above
//! - **`infrastructure`** - Configuration loading and logging setup
//!
//! # Example
//!
//! ```no_run
//! use eddep::adapter::outbound::{DirectoryStore, TracingReporter};
//! use eddep::application::Explorer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DirectoryStore::new("snapshots");
//!     let reporter = TracingReporter;
//!     let explorer = Explorer::new(&store, &reporter);
//!
//!     let report = explorer.trade2("Galileo", "Nourse")?;
//!     for trade in &report.trades {
//!         println!("{} +{}", trade.name, trade.profit);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
