use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};
use tracing::warn;

use crate::currency::parse_amount;
use crate::domain::fiscal::{
    DasGuide, DasnDeclaration, DeclarationStatus, FiscalDiagnosis, FiscalStanding, GuideStatus,
};
use crate::errors::CoreError;
use crate::fiscal::payload;

/// Fallback monthly guide value used when synthesizing debt for periods with
/// no guide on file. Overridable through `Config::average_monthly_guide`.
pub const DEFAULT_AVERAGE_MONTHLY_GUIDE: f64 = 75.0;

const SETTLED_MARKERS: &[&str] = &["liquidado", "pago"];
const DUE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Normalizes a raw fiscal payload into a `FiscalDiagnosis` relative to
/// `reference`. Individual malformed rows are skipped with a warning; a
/// payload with no recognizable structure fails with
/// `CoreError::MalformedFiscalPayload`.
pub fn normalize(
    raw: &Value,
    reference: NaiveDate,
    average_monthly_guide: f64,
) -> Result<FiscalDiagnosis, CoreError> {
    let located = payload::locate(raw)?;

    let mut guides: Vec<DasGuide> = located
        .guides
        .iter()
        .filter_map(|row| parse_guide(row, reference))
        .collect();
    // most recent first; rows without a parsable due date stay where they are
    guides.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(left), Some(right)) => right.cmp(&left),
        _ => Ordering::Equal,
    });

    let declarations: Vec<DasnDeclaration> = located
        .declarations
        .iter()
        .filter_map(parse_declaration)
        .collect();

    let mut total_estimated_debt: f64 = guides
        .iter()
        .filter(|guide| guide.status == GuideStatus::Overdue)
        .filter_map(|guide| parse_amount(&guide.total))
        .sum();

    let pending_declaration_count = declarations
        .iter()
        .filter(|declaration| declaration.status == DeclarationStatus::Pending)
        .count();

    let mut is_estimated = false;
    for year in estimation_years(&guides, &declarations, reference) {
        let months = estimated_months(year, &guides, reference);
        if months > 0 {
            total_estimated_debt += months as f64 * average_monthly_guide;
            is_estimated = true;
        }
    }

    let overall_status = if total_estimated_debt > 0.0 || pending_declaration_count > 0 {
        FiscalStanding::Irregular
    } else {
        FiscalStanding::Regular
    };

    Ok(FiscalDiagnosis {
        guides,
        declarations,
        total_estimated_debt,
        pending_declaration_count,
        overall_status,
        is_estimated,
    })
}

fn parse_guide(row: &Value, reference: NaiveDate) -> Option<DasGuide> {
    let object = match row.as_object() {
        Some(object) => object,
        None => {
            warn!("skipping malformed guide row: {row}");
            return None;
        }
    };

    let principal = text_field(object, &["principal", "valorPrincipal"]).unwrap_or_default();
    let total = text_field(object, &["total", "valorTotal"]).unwrap_or_default();
    // placeholder rows with no monetary value are dropped
    let has_value = parse_amount(&principal).unwrap_or(0.0) > 0.0
        || parse_amount(&total).unwrap_or(0.0) > 0.0;
    if !has_value {
        return None;
    }

    let period = text_field(object, &["periodoApuracao", "periodo", "pa"]).unwrap_or_default();
    let due_date_text = text_field(object, &["vencimento", "dataVencimento"]).unwrap_or_default();
    let due_date = NaiveDate::parse_from_str(&due_date_text, DUE_DATE_FORMAT).ok();
    let year = match int_field(object, &["ano", "anoCalendario"])
        .or_else(|| year_from_period(&period))
        .or_else(|| due_date.map(|date| date.year()))
    {
        Some(year) => year,
        None => {
            warn!("skipping guide row without a resolvable year: {row}");
            return None;
        }
    };
    let raw_status = text_field(object, &["situacao", "status"]).unwrap_or_default();
    let status = derive_guide_status(&raw_status, due_date, reference);

    Some(DasGuide {
        year,
        period,
        principal,
        fine: text_field(object, &["multa"]).unwrap_or_default(),
        interest: text_field(object, &["juros"]).unwrap_or_default(),
        total,
        due_date_text,
        raw_status,
        status,
        due_date,
    })
}

fn derive_guide_status(
    raw_status: &str,
    due_date: Option<NaiveDate>,
    reference: NaiveDate,
) -> GuideStatus {
    let lowered = raw_status.to_lowercase();
    if SETTLED_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return GuideStatus::Paid;
    }
    match due_date {
        Some(due) if due < reference => GuideStatus::Overdue,
        Some(_) => GuideStatus::Upcoming,
        None => GuideStatus::Pending,
    }
}

fn parse_declaration(row: &Value) -> Option<DasnDeclaration> {
    let object = match row.as_object() {
        Some(object) => object,
        None => {
            warn!("skipping malformed declaration row: {row}");
            return None;
        }
    };

    let year = match int_field(object, &["ano", "anoCalendario"]) {
        Some(year) => year,
        None => {
            warn!("skipping declaration row without a year: {row}");
            return None;
        }
    };
    let filed_date = text_field(object, &["dataTransmissao", "dataEntrega", "entrega"]);
    let raw_status = text_field(object, &["situacao", "status"]).unwrap_or_default();
    let status = derive_declaration_status(filed_date.as_deref(), &raw_status);

    Some(DasnDeclaration {
        year,
        filed_date,
        raw_status,
        status,
    })
}

fn derive_declaration_status(filed_date: Option<&str>, raw_status: &str) -> DeclarationStatus {
    let lowered = raw_status.to_lowercase();
    if lowered.contains("não optante") || lowered.contains("nao optante") {
        return DeclarationStatus::NotApplicable;
    }
    if filed_date.is_some() || (lowered.contains("regular") && !lowered.contains("irregular")) {
        return DeclarationStatus::Filed;
    }
    DeclarationStatus::Pending
}

/// Years whose debt must be synthesized: past years with a pending
/// declaration and no guides on file, plus the current year when the prior
/// year's declaration is still pending and no current-year guide exists.
/// The tax authority withholds current-year guides until the prior annual
/// declaration is filed.
fn estimation_years(
    guides: &[DasGuide],
    declarations: &[DasnDeclaration],
    reference: NaiveDate,
) -> BTreeSet<i32> {
    let current_year = reference.year();
    let mut years = BTreeSet::new();

    for declaration in declarations
        .iter()
        .filter(|declaration| declaration.status == DeclarationStatus::Pending)
    {
        if declaration.year < current_year
            && !guides.iter().any(|guide| guide.year == declaration.year)
        {
            years.insert(declaration.year);
        }
    }

    let prior_pending = declarations.iter().any(|declaration| {
        declaration.year == current_year - 1 && declaration.status == DeclarationStatus::Pending
    });
    if prior_pending && !guides.iter().any(|guide| guide.year == current_year) {
        years.insert(current_year);
    }

    years
}

/// A past year owes all 12 months; the current year owes the months elapsed
/// so far minus guides already on file, never negative.
fn estimated_months(year: i32, guides: &[DasGuide], reference: NaiveDate) -> u32 {
    if year < reference.year() {
        return 12;
    }
    let on_file = guides.iter().filter(|guide| guide.year == year).count() as u32;
    reference.month().saturating_sub(on_file)
}

fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| match value {
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
}

fn int_field(object: &Map<String, Value>, keys: &[&str]) -> Option<i32> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| match value {
            Value::Number(number) => number.as_i64().map(|n| n as i32),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        })
}

fn year_from_period(period: &str) -> Option<i32> {
    period
        .rsplit('/')
        .next()
        .and_then(|tail| tail.trim().parse().ok())
        .filter(|year| *year >= 2000)
}
