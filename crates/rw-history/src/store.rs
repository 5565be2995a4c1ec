//! Rolling history storage.
//!
//! Entries are kept as JSON lines, oldest first. The file is rewritten on every
//! append, which is fine for the few hundred readings a race day produces.

use crate::types::HistoryEntry;
use crate::{HistoryError, HistoryResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of [`HistoryStore::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Entry stored; `evicted` older entries dropped to respect the cap.
    Appended { evicted: usize },
    /// Newest stored entry already has this id; nothing written.
    Duplicate,
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
}

impl HistoryStore {
    pub fn open(path: impl Into<PathBuf>, max_entries: usize) -> HistoryResult<Self> {
        if max_entries == 0 {
            return Err(HistoryError::InvalidArg {
                what: "max_entries must be at least 1".to_string(),
            });
        }

        let path = path.into();
        if path.file_name().is_none() {
            return Err(HistoryError::InvalidPath {
                message: format!("'{}' does not name a file", path.display()),
            });
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { path, max_entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// All stored entries, oldest first. A missing file is an empty history.
    pub fn load(&self) -> HistoryResult<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut entries = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let entry: HistoryEntry = serde_json::from_str(line)?;
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// The newest `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> HistoryResult<Vec<HistoryEntry>> {
        let entries = self.load()?;
        let skip = entries.len().saturating_sub(limit);
        Ok(entries.into_iter().skip(skip).collect())
    }

    pub fn append(&self, entry: HistoryEntry) -> HistoryResult<AppendOutcome> {
        let mut entries = self.load()?;

        if entries.last().is_some_and(|last| last.id == entry.id) {
            warn!(id = %entry.id, "reading already recorded; skipping");
            return Ok(AppendOutcome::Duplicate);
        }

        entries.push(entry);
        let evicted = entries.len().saturating_sub(self.max_entries);
        if evicted > 0 {
            entries.drain(..evicted);
        }

        self.write_all(&entries)?;
        debug!(
            path = %self.path.display(),
            stored = entries.len(),
            evicted,
            "history updated"
        );
        Ok(AppendOutcome::Appended { evicted })
    }

    pub fn clear(&self) -> HistoryResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn write_all(&self, entries: &[HistoryEntry]) -> HistoryResult<()> {
        let mut content = String::new();
        for entry in entries {
            let line = serde_json::to_string(entry)?;
            content.push_str(&line);
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}
