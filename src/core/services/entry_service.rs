use tracing::info;
use uuid::Uuid;

use crate::domain::entry::{LedgerEntry, SeriesRequest};
use crate::errors::CoreError;
use crate::ledger::recurrence;
use crate::storage::{EntryFilter, EntryStore};

use super::{ServiceError, ServiceResult};

pub struct EntryService;

impl EntryService {
    /// Expands the request into one or more entries and persists them,
    /// returning the generated batch.
    pub fn create(
        store: &mut dyn EntryStore,
        request: &SeriesRequest,
    ) -> ServiceResult<Vec<LedgerEntry>> {
        if request.amount < 0.0 {
            return Err(ServiceError::Invalid("amount must be non-negative".into()));
        }
        if request.description.trim().is_empty() {
            return Err(ServiceError::Invalid("description must not be empty".into()));
        }
        let entries = recurrence::expand(request);
        store.insert_entries(&entries)?;
        if entries.len() > 1 {
            info!(
                "created series of {} entries ({:?})",
                entries.len(),
                request.repetition
            );
        }
        Ok(entries)
    }

    /// Replaces a stored entry. An edit never moves an entry into or out of
    /// a series, so the stored series fields are preserved.
    pub fn update(store: &mut dyn EntryStore, entry: &LedgerEntry) -> ServiceResult<()> {
        let stored = store
            .list_entries(&EntryFilter::default())?
            .into_iter()
            .find(|existing| existing.id == entry.id)
            .ok_or(CoreError::EntryNotFound(entry.id))?;
        let mut patched = entry.clone();
        patched.installment = stored.installment;
        patched.is_recurring = stored.is_recurring;
        patched.series_id = stored.series_id;
        store.update_entry(&patched)?;
        Ok(())
    }

    pub fn delete(store: &mut dyn EntryStore, id: Uuid) -> ServiceResult<()> {
        store.delete_entry(id)?;
        Ok(())
    }

    /// Removes every entry of the identified expand batch.
    pub fn delete_series(store: &mut dyn EntryStore, series_id: Uuid) -> ServiceResult<usize> {
        let removed = store.delete_series(series_id)?;
        info!("deleted series {series_id} ({removed} entries)");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{EntryKind, EntryStatus, RepetitionMode};
    use crate::storage::MemoryEntryStore;
    use chrono::NaiveDate;

    fn series_request() -> SeriesRequest {
        SeriesRequest::single(
            "office rent",
            "fixed-costs",
            EntryKind::Expense,
            900.0,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            EntryStatus::Pending,
        )
        .with_repetition(RepetitionMode::Recurring, 6)
    }

    #[test]
    fn create_persists_expanded_batch() {
        let mut store = MemoryEntryStore::new();
        let created = EntryService::create(&mut store, &series_request()).unwrap();
        assert_eq!(created.len(), 6);
        assert_eq!(store.list_entries(&EntryFilter::default()).unwrap().len(), 6);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut store = MemoryEntryStore::new();
        let mut request = series_request();
        request.amount = -1.0;
        let err = EntryService::create(&mut store, &request).unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn update_preserves_series_fields() {
        let mut store = MemoryEntryStore::new();
        let created = EntryService::create(&mut store, &series_request()).unwrap();

        let mut edited = created[2].clone();
        edited.amount = 950.0;
        edited.is_recurring = false;
        edited.series_id = None;
        EntryService::update(&mut store, &edited).unwrap();

        let stored = store
            .list_entries(&EntryFilter::default())
            .unwrap()
            .into_iter()
            .find(|entry| entry.id == edited.id)
            .unwrap();
        assert!((stored.amount - 950.0).abs() < f64::EPSILON);
        assert!(stored.is_recurring);
        assert_eq!(stored.series_id, created[2].series_id);
    }

    #[test]
    fn delete_series_removes_the_batch() {
        let mut store = MemoryEntryStore::new();
        let created = EntryService::create(&mut store, &series_request()).unwrap();
        let series_id = created[0].series_id.unwrap();
        let removed = EntryService::delete_series(&mut store, series_id).unwrap();
        assert_eq!(removed, 6);
        assert!(store
            .list_entries(&EntryFilter::default())
            .unwrap()
            .is_empty());
    }
}
