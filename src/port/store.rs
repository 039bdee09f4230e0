//! Snapshot store port.
//!
//! The store is the only place snapshot files are touched. Everything above
//! it works on names and lines.

use crate::error::Result;

/// Flat collection of snapshot files addressed by file name.
pub trait SnapshotStore {
    /// Names of every entry in the store, sorted ascending.
    ///
    /// Names that do not follow the snapshot naming convention are returned
    /// too; the catalog decides what is a snapshot.
    fn names(&self) -> Result<Vec<String>>;

    /// Lines of the named file, without line terminators.
    fn read_lines(&self, name: &str) -> Result<Vec<String>>;

    /// Delete the named file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::RetentionIo`] when the file cannot be
    /// removed.
    fn remove(&self, name: &str) -> Result<()>;
}
