//! The file-backed save sink.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use larder_engine::SaveSink;
use larder_foundation::{Error, ErrorKind, Grocery, LocationRegistry, Result};

use crate::snapshot::{Snapshot, from_bytes, to_bytes};

/// Persists catalog snapshots to a single file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the last persisted snapshot, or an empty one if the file does
    /// not exist yet (first run).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn load_or_default(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no save file yet, starting empty");
            return Ok(Snapshot::default());
        }

        let file = File::open(&self.path).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to open file '{}': {e}",
                self.path.display()
            )))
        })?;

        let mut reader = BufReader::new(file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to read file '{}': {e}",
                self.path.display()
            )))
        })?;

        from_bytes(&bytes)
    }

    /// Saves a snapshot, creating parent directories and the file as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to, or if
    /// serialization fails.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::new(ErrorKind::Io(format!(
                        "failed to create directory '{}': {e}",
                        parent.display()
                    )))
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to create file '{}': {e}",
                self.path.display()
            )))
        })?;

        let mut writer = BufWriter::new(file);
        let bytes = to_bytes(snapshot)?;

        writer.write_all(&bytes).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to write to file '{}': {e}",
                self.path.display()
            )))
        })?;

        writer.flush().map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to flush file '{}': {e}",
                self.path.display()
            )))
        })
    }
}

impl SaveSink for FileStore {
    fn save(&mut self, groceries: &[Grocery], locations: &LocationRegistry) -> Result<()> {
        let snapshot = Snapshot::capture(groceries, locations);
        Self::save(self, &snapshot)
    }
}
