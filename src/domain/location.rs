//! Canonical location identifier.

use serde::Serialize;
use std::fmt;

/// A `system.station` pair under which snapshots are filed.
///
/// The inner String is private; construction goes through [`Location::new`]
/// or [`Location::from_parts`] so the canonical form stays dot-joined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a location from an already canonical `system.station` string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a location from its star system and station names.
    pub fn from_parts(system: &str, station: &str) -> Self {
        Self(format!("{system}.{station}"))
    }

    /// Get the canonical name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The star system part (everything before the first dot).
    pub fn system(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(system, _)| system)
    }

    /// The station part (everything after the first dot), empty if absent.
    pub fn station(&self) -> &str {
        self.0.split_once('.').map_or("", |(_, station)| station)
    }

    /// Whether the canonical name contains `snippet` (case-sensitive).
    pub fn contains(&self, snippet: &str) -> bool {
        self.0.contains(snippet)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
