//! Reporter that forwards notices to `tracing`.

use tracing::{debug, error, info};

use crate::port::Reporter;

/// Routes reporter notices into the log, for non-interactive callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn debug(&self, message: &str) {
        debug!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}
