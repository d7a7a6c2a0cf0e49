use chrono::{Datelike, NaiveDate};

use crate::domain::entry::{EntryKind, EntryStatus, LedgerEntry};
use crate::domain::summary::MonthlyMetrics;

/// Computes realized and projected cash metrics for one calendar month.
///
/// Pure over its inputs; the caller supplies `today` so overdue/upcoming
/// classification never reads the wall clock.
pub fn compute_monthly(
    entries: &[LedgerEntry],
    month: u32,
    year: i32,
    today: NaiveDate,
) -> MonthlyMetrics {
    let mut metrics = MonthlyMetrics::default();
    let in_month = entries
        .iter()
        .filter(|entry| entry.date.month() == month && entry.date.year() == year);

    for entry in in_month {
        match entry.status {
            EntryStatus::Settled => metrics.realized_balance += entry.signed_amount(),
            EntryStatus::Pending => {
                match entry.kind {
                    EntryKind::Revenue => metrics.pending_receivable += entry.amount,
                    EntryKind::Expense => metrics.pending_payable += entry.amount,
                }
                // exposure buckets take the raw amount, not netted by kind
                if entry.date < today {
                    metrics.overdue_amount += entry.amount;
                } else {
                    metrics.upcoming_amount += entry.amount;
                }
            }
        }
    }

    metrics.projected_balance =
        metrics.realized_balance + metrics.pending_receivable - metrics.pending_payable;
    metrics
}
