use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::entry::LedgerEntry;
use crate::errors::CoreError;
use crate::utils::write_atomic;

use super::{EntryFilter, EntryStore, Result};

/// File-backed entry store. The whole collection is one JSON document,
/// rewritten atomically on every mutation.
pub struct JsonEntryStore {
    path: PathBuf,
    entries: Vec<LedgerEntry>,
}

impl JsonEntryStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, &json)
    }
}

impl EntryStore for JsonEntryStore {
    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<LedgerEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }

    fn insert_entries(&mut self, entries: &[LedgerEntry]) -> Result<()> {
        self.entries.extend_from_slice(entries);
        self.persist()
    }

    fn update_entry(&mut self, entry: &LedgerEntry) -> Result<()> {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.id == entry.id)
        {
            Some(existing) => *existing = entry.clone(),
            None => return Err(CoreError::EntryNotFound(entry.id)),
        }
        self.persist()
    }

    fn delete_entry(&mut self, id: Uuid) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Err(CoreError::EntryNotFound(id));
        }
        self.persist()
    }

    fn delete_series(&mut self, series_id: Uuid) -> Result<usize> {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.series_id != Some(series_id));
        let removed = before - self.entries.len();
        if removed == 0 {
            return Err(CoreError::SeriesNotFound(series_id));
        }
        self.persist()?;
        Ok(removed)
    }
}
