use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

use crate::domain::entry::{
    EntryStatus, Installment, LedgerEntry, RepetitionMode, SeriesRequest,
};

/// Expands one transaction draft into the concrete ledger entries it implies.
///
/// A series request produces one entry per calendar month starting at the
/// request date. The first entry keeps the requested status; every later
/// occurrence is a forecast and is forced to pending. All entries of one
/// batch share a freshly generated series id.
pub fn expand(request: &SeriesRequest) -> Vec<LedgerEntry> {
    let count = effective_count(request);
    if count <= 1 {
        return vec![entry_from_request(request, request.date, request.status)];
    }

    let series_id = Uuid::new_v4();
    let mut entries = Vec::with_capacity(count as usize);
    for i in 0..count {
        let status = if i == 0 {
            request.status
        } else {
            EntryStatus::Pending
        };
        let mut entry = entry_from_request(request, add_months(request.date, i), status);
        entry.series_id = Some(series_id);
        match request.repetition {
            RepetitionMode::Installment => {
                entry.installment = Some(Installment {
                    index: i + 1,
                    total: count,
                });
            }
            RepetitionMode::Recurring => entry.is_recurring = true,
            RepetitionMode::None => {}
        }
        entries.push(entry);
    }
    entries
}

/// A series needs at least two occurrences; anything less degrades to a
/// single entry instead of failing.
fn effective_count(request: &SeriesRequest) -> u32 {
    match request.repetition {
        RepetitionMode::None => 1,
        RepetitionMode::Installment | RepetitionMode::Recurring => {
            if request.count < 2 {
                1
            } else {
                request.count
            }
        }
    }
}

fn entry_from_request(request: &SeriesRequest, date: NaiveDate, status: EntryStatus) -> LedgerEntry {
    LedgerEntry::new(
        request.description.clone(),
        request.category.clone(),
        request.kind,
        request.amount,
        date,
        status,
    )
}

/// Advances a date by whole calendar months. A start day past the end of the
/// target month rolls over into the following month (Jan 31 + 1 month lands
/// on Mar 2 or 3) rather than clamping to month end.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day();
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(shifted) => shifted,
        None => {
            let overflow = day - days_in_month(year, month);
            first_of_next_month(year, month) + Duration::days(overflow as i64 - 1)
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (first_of_next_month(year, month) - Duration::days(1)).day()
}

fn first_of_next_month(year: i32, month: u32) -> NaiveDate {
    let (year, month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}
