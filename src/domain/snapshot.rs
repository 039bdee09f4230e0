//! Snapshot identifiers derived from the on-disk naming convention.
//!
//! A snapshot file is named
//! `<system>.<station>.<YYYY>-<MM>-<DD>T<HH>.<MM>.<SS><suffix>.<ext>` where
//! `<ext>` is `csv` or `prices`. Names that do not follow the convention are
//! not snapshots and parse to `None`.

use serde::Serialize;
use std::fmt;

use super::location::Location;

/// Width of the timestamp segment, `YYYY-MM-DDTHH.MM.SS`.
const TIMESTAMP_LEN: usize = 19;

/// Separator expected at each non-digit position of the timestamp segment.
const TIMESTAMP_SEPARATORS: [(usize, u8); 5] =
    [(4, b'-'), (7, b'-'), (10, b'T'), (13, b'.'), (16, b'.')];

/// The two parallel snapshot families, retained independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    /// Semicolon-delimited market table (`.csv`).
    Csv,
    /// Price listing (`.prices`).
    Prices,
}

impl SnapshotKind {
    /// All kinds, in reporting order.
    pub const ALL: [SnapshotKind; 2] = [SnapshotKind::Csv, SnapshotKind::Prices];

    /// File extension (without the dot) for this kind.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Prices => "prices",
        }
    }

    fn from_file_name(name: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|kind| {
            name.strip_suffix(kind.extension())
                .and_then(|rest| rest.strip_suffix('.'))
                .map(|stem| (kind, stem))
        })
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Capture time of a snapshot, kept both as written and as numeric
/// components (year, month, day, hour, minute, second).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    raw: String,
    components: [u32; 6],
}

impl Timestamp {
    /// Parse a `YYYY-MM-DDTHH.MM.SS` segment.
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        if bytes.len() != TIMESTAMP_LEN {
            return None;
        }
        for (index, byte) in bytes.iter().enumerate() {
            let expected = TIMESTAMP_SEPARATORS
                .iter()
                .find(|(position, _)| *position == index)
                .map(|(_, separator)| *separator);
            let ok = match expected {
                Some(separator) => *byte == separator,
                None => byte.is_ascii_digit(),
            };
            if !ok {
                return None;
            }
        }

        let mut components = [0u32; 6];
        let spans = [(0, 4), (5, 7), (8, 10), (11, 13), (14, 16), (17, 19)];
        for (slot, (start, end)) in components.iter_mut().zip(spans) {
            *slot = raw[start..end].parse().ok()?;
        }

        Some(Self {
            raw: raw.to_string(),
            components,
        })
    }

    /// The timestamp as it appears in the file name.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric components, most significant first.
    pub fn components(&self) -> [u32; 6] {
        self.components
    }

    /// Whether this timestamp replaces `incumbent` as the most recent one.
    ///
    /// Components are scanned left to right and the scan stops at the first
    /// component that is strictly greater than the incumbent's. A component
    /// that is smaller does not stop the scan, so `2024-01-15` supersedes
    /// `2024-02-01` (the day wins after the month lost). Equal timestamps
    /// never supersede each other.
    pub fn supersedes(&self, incumbent: &Timestamp) -> bool {
        self.components
            .iter()
            .zip(incumbent.components.iter())
            .any(|(candidate, current)| candidate > current)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One captured snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SnapshotId {
    location: Location,
    timestamp: Timestamp,
    kind: SnapshotKind,
    file_name: String,
}

impl SnapshotId {
    /// Derive a snapshot id from a file name, or `None` when the name does
    /// not follow the snapshot naming convention.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (kind, stem) = SnapshotKind::from_file_name(name)?;

        // The timestamp is the first `.YYYY-MM-DDTHH.MM.SS` segment; everything
        // before it is the location, so station names may contain dots.
        let (location, timestamp) = stem.match_indices('.').find_map(|(dot, _)| {
            let start = dot + 1;
            let segment = stem.get(start..start + TIMESTAMP_LEN)?;
            let timestamp = Timestamp::parse(segment)?;
            Some((&stem[..dot], timestamp))
        })?;

        let (system, station) = location.split_once('.')?;
        if system.is_empty() || station.is_empty() {
            return None;
        }

        Some(Self {
            location: Location::from_parts(system, station),
            timestamp,
            kind,
            file_name: name.to_string(),
        })
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn kind(&self) -> SnapshotKind {
        self.kind
    }

    /// The file name this id was derived from.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}
