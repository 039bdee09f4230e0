use std::sync::{Arc, Mutex};

use eddep::port::Reporter;

/// Severity of a recorded notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

/// Thread-safe notice collector for reporter assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    notices: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.notices
            .lock()
            .expect("lock reporter notices")
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        self.notices
            .lock()
            .expect("lock reporter notices")
            .push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn debug(&self, message: &str) {
        self.record(Level::Debug, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}
