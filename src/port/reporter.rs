//! Reporting port for user-facing notices.
//!
//! Core components receive a `&dyn Reporter` instead of reaching into global
//! logging state. The console adapter prints notices, the tracing adapter
//! turns them into log events, and tests record them.

/// Sink for informational, debug, and error notices.
pub trait Reporter {
    /// A notice worth showing to an interactive user, such as which location
    /// a snippet resolved to.
    fn info(&self, message: &str);

    /// Diagnostic detail, normally hidden.
    fn debug(&self, message: &str);

    /// A failure that did not abort the current operation.
    fn error(&self, message: &str);
}

/// Reporter that discards everything, for automated callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
