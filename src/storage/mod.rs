pub mod json_backend;

use chrono::Datelike;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entry::{EntryStatus, LedgerEntry};
use crate::errors::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Server-side filter for entry listings; `None` fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryFilter {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub status: Option<EntryStatus>,
}

impl EntryFilter {
    pub fn for_month(month: u32, year: i32) -> Self {
        Self {
            month: Some(month),
            year: Some(year),
            status: None,
        }
    }

    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        if let Some(month) = self.month {
            if entry.date.month() != month {
                return false;
            }
        }
        if let Some(year) = self.year {
            if entry.date.year() != year {
                return false;
            }
        }
        if let Some(status) = self.status {
            if entry.status != status {
                return false;
            }
        }
        true
    }
}

/// Abstraction over the persistence collaborator that owns ledger entries.
pub trait EntryStore: Send + Sync {
    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<LedgerEntry>>;
    fn insert_entries(&mut self, entries: &[LedgerEntry]) -> Result<()>;
    fn update_entry(&mut self, entry: &LedgerEntry) -> Result<()>;
    fn delete_entry(&mut self, id: Uuid) -> Result<()>;
    /// Removes every entry generated by one expand batch, returning how many
    /// entries were removed.
    fn delete_series(&mut self, series_id: Uuid) -> Result<usize>;
}

/// Collaborator that retrieves the opaque fiscal payload for a company.
pub trait FiscalDataSource: Send + Sync {
    fn fetch_fiscal_payload(&self, tax_id: &str) -> Result<Value>;
}

/// Entry store held entirely in memory. Reference implementation for callers
/// that fetch entries from a remote data store, and the default harness for
/// tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryEntryStore {
    entries: Vec<LedgerEntry>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }
}

impl EntryStore for MemoryEntryStore {
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
        Ok(())
    }

    fn update_entry(&mut self, entry: &LedgerEntry) -> Result<()> {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.id == entry.id)
        {
            Some(existing) => {
                *existing = entry.clone();
                Ok(())
            }
            None => Err(CoreError::EntryNotFound(entry.id)),
        }
    }

    fn delete_entry(&mut self, id: Uuid) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Err(CoreError::EntryNotFound(id));
        }
        Ok(())
    }

    fn delete_series(&mut self, series_id: Uuid) -> Result<usize> {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.series_id != Some(series_id));
        let removed = before - self.entries.len();
        if removed == 0 {
            return Err(CoreError::SeriesNotFound(series_id));
        }
        Ok(removed)
    }
}

pub use json_backend::JsonEntryStore;
