#![allow(dead_code)]

use caixa_core::domain::{EntryKind, EntryStatus, LedgerEntry};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn entry(kind: EntryKind, amount: f64, on: NaiveDate, status: EntryStatus) -> LedgerEntry {
    LedgerEntry::new("entry", "general", kind, amount, on, status)
}

pub fn revenue(amount: f64, on: NaiveDate, status: EntryStatus) -> LedgerEntry {
    entry(EntryKind::Revenue, amount, on, status)
}

pub fn expense(amount: f64, on: NaiveDate, status: EntryStatus) -> LedgerEntry {
    entry(EntryKind::Expense, amount, on, status)
}
