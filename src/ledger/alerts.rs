use crate::currency::format_currency;
use crate::domain::alert::{Alert, AlertKind, AlertSeverity, AlertTarget};
use crate::domain::fiscal::FiscalDiagnosis;
use crate::domain::summary::{LiquidityForecast, MonthlyMetrics};

/// Window used to flag upcoming pending entries.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Fixed navigation mapping from alert kind to presentation destination.
pub fn target_for(kind: AlertKind) -> AlertTarget {
    match kind {
        AlertKind::OverdueItems => AlertTarget::Entries,
        AlertKind::UpcomingItems => AlertTarget::Agenda,
        AlertKind::NegativeProjection => AlertTarget::Dashboard,
        AlertKind::AllClear => AlertTarget::Dashboard,
    }
}

/// Combines the monthly metrics, the liquidity forecast, and the fiscal
/// diagnosis into a ranked list of actionable alerts.
///
/// An absent fiscal diagnosis contributes no fiscal alerts and never
/// suppresses the financial ones.
pub fn prioritize(
    metrics: &MonthlyMetrics,
    forecast: &LiquidityForecast,
    fiscal: Option<&FiscalDiagnosis>,
    pending_next_7_days: usize,
    overdue_count: usize,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let fiscal_overdue = fiscal.map(FiscalDiagnosis::overdue_guide_count).unwrap_or(0);
    let pending_declarations = fiscal
        .map(|diagnosis| diagnosis.pending_declaration_count)
        .unwrap_or(0);
    let total_overdue = overdue_count + fiscal_overdue + pending_declarations;
    if total_overdue > 0 {
        alerts.push(build(
            AlertKind::OverdueItems,
            AlertSeverity::Critical,
            "Overdue items",
            format!(
                "{} overdue item(s), {} past due this month",
                total_overdue,
                format_currency(metrics.overdue_amount)
            ),
        ));
    }

    if pending_next_7_days > 0 {
        alerts.push(build(
            AlertKind::UpcomingItems,
            AlertSeverity::Warning,
            "Due soon",
            format!(
                "{} item(s) due in the next {} days",
                pending_next_7_days, UPCOMING_WINDOW_DAYS
            ),
        ));
    }

    if forecast.is_projected_negative {
        let days = forecast.days_until_negative.unwrap_or(1);
        alerts.push(build(
            AlertKind::NegativeProjection,
            AlertSeverity::Warning,
            "Negative balance ahead",
            format!("Cash balance projected to go negative in {} day(s)", days),
        ));
    }

    if alerts.is_empty() {
        alerts.push(build(
            AlertKind::AllClear,
            AlertSeverity::Info,
            "All clear",
            "No overdue items, upcoming bills, or projected shortfalls".to_string(),
        ));
    }

    alerts
}

fn build(kind: AlertKind, severity: AlertSeverity, title: &str, message: String) -> Alert {
    Alert {
        kind,
        severity,
        title: title.to_string(),
        message,
        target: target_for(kind),
    }
}
