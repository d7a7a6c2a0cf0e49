mod common;

use caixa_core::core::services::{DashboardService, EntryService};
use caixa_core::domain::{
    AlertKind, EntryKind, EntryStatus, MonthlyMetrics, RepetitionMode, SeriesRequest,
};
use caixa_core::ledger::{compute_monthly, forecast, DEFAULT_HORIZON_DAYS};
use caixa_core::storage::{EntryFilter, EntryStore, JsonEntryStore};
use chrono::Duration;
use common::{date, expense, revenue};

#[test]
fn empty_month_yields_all_zero_metrics() {
    let metrics = compute_monthly(&[], 6, 2024, date(2024, 6, 15));
    assert_eq!(metrics, MonthlyMetrics::default());
}

#[test]
fn projected_balance_invariant_holds() {
    let today = date(2024, 6, 15);
    let entries = vec![
        revenue(1000.0, date(2024, 6, 1), EntryStatus::Settled),
        expense(400.0, date(2024, 6, 5), EntryStatus::Settled),
        revenue(250.0, date(2024, 6, 10), EntryStatus::Pending),
        expense(120.0, date(2024, 6, 20), EntryStatus::Pending),
        expense(80.0, date(2024, 6, 12), EntryStatus::Pending),
        // outside the month, must be ignored
        revenue(999.0, date(2024, 5, 31), EntryStatus::Settled),
    ];
    let metrics = compute_monthly(&entries, 6, 2024, today);

    assert!((metrics.realized_balance - 600.0).abs() < f64::EPSILON);
    assert!(
        (metrics.projected_balance
            - (metrics.realized_balance + metrics.pending_receivable - metrics.pending_payable))
            .abs()
            < f64::EPSILON
    );
    assert!(
        (metrics.overdue_amount + metrics.upcoming_amount
            - (metrics.pending_receivable + metrics.pending_payable))
            .abs()
            < f64::EPSILON
    );
    // pending revenue of June 10 and pending expense of June 12 are both past
    // due on June 15: raw amounts, not netted by kind
    assert!((metrics.overdue_amount - 330.0).abs() < f64::EPSILON);
    assert!((metrics.upcoming_amount - 120.0).abs() < f64::EPSILON);
}

#[test]
fn forecast_finds_first_negative_day() {
    let today = date(2024, 6, 15);
    let entries = vec![
        revenue(100.0, today - Duration::days(1), EntryStatus::Settled),
        expense(200.0, today + Duration::days(3), EntryStatus::Pending),
    ];
    let result = forecast(&entries, today, DEFAULT_HORIZON_DAYS);
    assert!(result.is_projected_negative);
    assert_eq!(result.days_until_negative, Some(3));
}

#[test]
fn forecast_records_only_the_first_crossing() {
    let today = date(2024, 6, 15);
    let entries = vec![
        revenue(50.0, today - Duration::days(10), EntryStatus::Settled),
        expense(100.0, today + Duration::days(2), EntryStatus::Pending),
        revenue(500.0, today + Duration::days(5), EntryStatus::Pending),
        expense(600.0, today + Duration::days(8), EntryStatus::Pending),
    ];
    let result = forecast(&entries, today, DEFAULT_HORIZON_DAYS);
    assert!(result.is_projected_negative);
    assert_eq!(result.days_until_negative, Some(2));
}

#[test]
fn added_pending_revenue_cannot_introduce_a_crossing() {
    let today = date(2024, 6, 15);
    let mut entries = vec![
        revenue(100.0, today - Duration::days(1), EntryStatus::Settled),
        expense(90.0, today + Duration::days(2), EntryStatus::Pending),
    ];
    assert!(!forecast(&entries, today, DEFAULT_HORIZON_DAYS).is_projected_negative);

    entries.push(revenue(40.0, today + Duration::days(1), EntryStatus::Pending));
    assert!(!forecast(&entries, today, DEFAULT_HORIZON_DAYS).is_projected_negative);
}

#[test]
fn removing_a_pending_expense_never_moves_the_crossing_earlier() {
    let today = date(2024, 6, 15);
    let full = vec![
        revenue(100.0, today - Duration::days(1), EntryStatus::Settled),
        expense(120.0, today + Duration::days(2), EntryStatus::Pending),
        expense(80.0, today + Duration::days(6), EntryStatus::Pending),
    ];
    let with_both = forecast(&full, today, DEFAULT_HORIZON_DAYS);
    assert_eq!(with_both.days_until_negative, Some(2));

    let reduced: Vec<_> = full
        .iter()
        .cloned()
        .filter(|entry| entry.date != today + Duration::days(2))
        .collect();
    let without_first = forecast(&reduced, today, DEFAULT_HORIZON_DAYS);
    match without_first.days_until_negative {
        Some(day) => assert!(day > 2),
        None => assert!(!without_first.is_projected_negative),
    }
}

#[test]
fn no_crossing_within_horizon_stays_positive() {
    let today = date(2024, 6, 15);
    let entries = vec![
        revenue(100.0, today - Duration::days(1), EntryStatus::Settled),
        // beyond the horizon, must not count
        expense(500.0, today + Duration::days(40), EntryStatus::Pending),
    ];
    let result = forecast(&entries, today, DEFAULT_HORIZON_DAYS);
    assert!(!result.is_projected_negative);
    assert_eq!(result.days_until_negative, None);
}

#[test]
fn series_flows_from_creation_to_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonEntryStore::open(dir.path().join("entries.json")).unwrap();
    let today = date(2024, 1, 20);

    let request = SeriesRequest::single(
        "new laptop",
        "equipment",
        EntryKind::Expense,
        250.0,
        date(2024, 1, 25),
        EntryStatus::Pending,
    )
    .with_repetition(RepetitionMode::Installment, 4);
    let created = EntryService::create(&mut store, &request).unwrap();
    assert_eq!(created.len(), 4);

    let single = SeriesRequest::single(
        "consulting invoice",
        "services",
        EntryKind::Revenue,
        2000.0,
        date(2024, 1, 10),
        EntryStatus::Settled,
    );
    EntryService::create(&mut store, &single).unwrap();

    let metrics = DashboardService::month_overview(&store, 1, 2024, today).unwrap();
    assert!((metrics.realized_balance - 2000.0).abs() < f64::EPSILON);
    assert!((metrics.pending_payable - 250.0).abs() < f64::EPSILON);
    assert!((metrics.upcoming_amount - 250.0).abs() < f64::EPSILON);

    let alerts = DashboardService::alerts(&store, None, today, DEFAULT_HORIZON_DAYS).unwrap();
    assert_eq!(alerts[0].kind, AlertKind::UpcomingItems);

    // deleting the series clears the pending installments
    let series_id = created[0].series_id.unwrap();
    EntryService::delete_series(&mut store, series_id).unwrap();
    assert_eq!(store.list_entries(&EntryFilter::default()).unwrap().len(), 1);
}
