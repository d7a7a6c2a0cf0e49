use chrono::{Duration, NaiveDate};

use crate::domain::entry::LedgerEntry;
use crate::domain::summary::LiquidityForecast;

pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Walks the pending schedule forward from `today` to find the first day the
/// running balance would go strictly negative.
///
/// The balance is seeded from every settled entry dated on or before `today`
/// across all time; this is a running-cash check, not a monthly statement.
/// Pending entries are applied in date order and ties keep their original
/// relative order. Day 1 of the walk is tomorrow.
pub fn forecast(entries: &[LedgerEntry], today: NaiveDate, horizon_days: u32) -> LiquidityForecast {
    let mut balance: f64 = entries
        .iter()
        .filter(|entry| entry.is_settled() && entry.date <= today)
        .map(LedgerEntry::signed_amount)
        .sum();

    let mut pending: Vec<&LedgerEntry> = entries
        .iter()
        .filter(|entry| entry.is_pending() && entry.date >= today)
        .collect();
    pending.sort_by_key(|entry| entry.date);

    let mut result = LiquidityForecast::default();
    let mut next = 0usize;
    for offset in 1..=horizon_days {
        let day = today + Duration::days(offset as i64);
        while next < pending.len() && pending[next].date < day {
            next += 1;
        }
        while next < pending.len() && pending[next].date == day {
            balance += pending[next].signed_amount();
            next += 1;
        }
        if balance < 0.0 && !result.is_projected_negative {
            result.is_projected_negative = true;
            result.days_until_negative = Some(offset);
        }
    }
    result
}
