use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Currency symbol used by every amount crossing the fiscal boundary.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "pt-BR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

/// Shared Brazilian locale used across the crate.
pub static PT_BR: Lazy<LocaleConfig> = Lazy::new(LocaleConfig::default);

/// Parses a Brazilian-locale currency string (`"R$ 1.234,56"`, `"150,00"`)
/// into a plain decimal number. Returns `None` when no numeric content is
/// present.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let without_symbol = trimmed.trim_start_matches(CURRENCY_SYMBOL).trim();
    let mut normalized = String::with_capacity(without_symbol.len());
    for ch in without_symbol.chars() {
        match ch {
            // grouping separator
            '.' => {}
            // decimal separator
            ',' => normalized.push('.'),
            ' ' | '\u{a0}' => {}
            _ => normalized.push(ch),
        }
    }
    if !normalized.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    normalized.parse::<f64>().ok()
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

/// Formats a plain decimal amount in the Brazilian locale (`1234.56` →
/// `"1.234,56"`).
pub fn format_amount(value: f64) -> String {
    format_number(&PT_BR, value, 2)
}

/// Formats an amount with the currency symbol (`1234.56` → `"R$ 1.234,56"`).
pub fn format_currency(value: f64) -> String {
    let body = format_amount(value.abs());
    if value < 0.0 {
        format!("-{} {}", CURRENCY_SYMBOL, body)
    } else {
        format!("{} {}", CURRENCY_SYMBOL, body)
    }
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
