//! Filesystem-backed snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};
use crate::port::SnapshotStore;

/// Snapshot store over a flat directory, such as the capture tool's output
/// directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl SnapshotStore for DirectoryStore {
    fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            // Non UTF-8 names can never follow the snapshot convention.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        debug!(root = %self.root.display(), count = names.len(), "listed data directory");
        Ok(names)
    }

    fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        debug!(file = name, "reading snapshot");
        let content = fs::read_to_string(self.path(name)).map_err(|source| Error::SnapshotRead {
            file: name.to_string(),
            source,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn remove(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.path(name)) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!(file = name, "snapshot already gone");
                Ok(())
            }
            Err(source) => Err(Error::RetentionIo {
                file: name.to_string(),
                source,
            }),
        }
    }
}
