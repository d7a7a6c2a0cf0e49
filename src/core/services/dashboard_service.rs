use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::alert::Alert;
use crate::domain::fiscal::FiscalDiagnosis;
use crate::domain::summary::{LiquidityForecast, MonthlyMetrics};
use crate::ledger::{alerts, compute_monthly, forecast};
use crate::storage::{EntryFilter, EntryStore};

use super::ServiceResult;

pub struct DashboardService;

impl DashboardService {
    pub fn month_overview(
        store: &dyn EntryStore,
        month: u32,
        year: i32,
        today: NaiveDate,
    ) -> ServiceResult<MonthlyMetrics> {
        let entries = store.list_entries(&EntryFilter::for_month(month, year))?;
        Ok(compute_monthly(&entries, month, year, today))
    }

    pub fn liquidity(
        store: &dyn EntryStore,
        today: NaiveDate,
        horizon_days: u32,
    ) -> ServiceResult<LiquidityForecast> {
        let entries = store.list_entries(&EntryFilter::default())?;
        Ok(forecast(&entries, today, horizon_days))
    }

    /// Assembles the ranked alert list for the dashboard. The fiscal
    /// diagnosis is optional; when unavailable it contributes nothing and
    /// never suppresses the financial alerts.
    pub fn alerts(
        store: &dyn EntryStore,
        fiscal: Option<&FiscalDiagnosis>,
        today: NaiveDate,
        horizon_days: u32,
    ) -> ServiceResult<Vec<Alert>> {
        let entries = store.list_entries(&EntryFilter::default())?;
        let metrics = compute_monthly(&entries, today.month(), today.year(), today);
        let liquidity = forecast(&entries, today, horizon_days);

        let upcoming_cutoff = today + Duration::days(alerts::UPCOMING_WINDOW_DAYS);
        let pending_next_7_days = entries
            .iter()
            .filter(|entry| {
                entry.is_pending() && entry.date >= today && entry.date <= upcoming_cutoff
            })
            .count();
        let overdue_count = entries
            .iter()
            .filter(|entry| entry.is_pending() && entry.date < today)
            .count();

        Ok(alerts::prioritize(
            &metrics,
            &liquidity,
            fiscal,
            pending_next_7_days,
            overdue_count,
        ))
    }
}
