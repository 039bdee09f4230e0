//! Trait definitions at the edges of the core.
//!
//! Adapters implement these to plug the core into the filesystem, the
//! console, and the logging backend.
//!
//! - [`SnapshotStore`] - where snapshot files live
//! - [`Reporter`] - where user-facing notices go

mod reporter;
mod store;

pub use reporter::{NullReporter, Reporter};
pub use store::SnapshotStore;
