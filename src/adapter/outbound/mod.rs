//! Outbound adapters: the filesystem store and the log-backed reporter.

mod directory;
mod tracing_reporter;

pub use directory::DirectoryStore;
pub use tracing_reporter::TracingReporter;
