use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    Revenue,
    Expense,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryStatus {
    Settled,
    Pending,
}

/// Position of an entry inside an installment series (1-based).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Installment {
    pub index: u32,
    pub total: u32,
}

/// A single dated ledger movement, either realized or forecasted.
///
/// At most one of `installment` and `is_recurring` is ever set: both mark
/// membership in a series, but of different kinds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub description: String,
    pub category: String,
    pub kind: EntryKind,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment: Option<Installment>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
}

impl LedgerEntry {
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        kind: EntryKind,
        amount: f64,
        date: NaiveDate,
        status: EntryStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            category: category.into(),
            kind,
            amount,
            date,
            status,
            installment: None,
            is_recurring: false,
            series_id: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.status == EntryStatus::Settled
    }

    pub fn is_pending(&self) -> bool {
        self.status == EntryStatus::Pending
    }

    /// Signed contribution to a running balance: revenue adds, expense subtracts.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Revenue => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RepetitionMode {
    #[default]
    None,
    Installment,
    Recurring,
}

/// Input to the recurrence expander: one user-entered draft plus how it repeats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub description: String,
    pub category: String,
    pub kind: EntryKind,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: EntryStatus,
    #[serde(default)]
    pub repetition: RepetitionMode,
    /// Number of occurrences; only meaningful when `repetition` is a series mode.
    #[serde(default)]
    pub count: u32,
}

impl SeriesRequest {
    pub fn single(
        description: impl Into<String>,
        category: impl Into<String>,
        kind: EntryKind,
        amount: f64,
        date: NaiveDate,
        status: EntryStatus,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            kind,
            amount,
            date,
            status,
            repetition: RepetitionMode::None,
            count: 0,
        }
    }

    pub fn with_repetition(mut self, repetition: RepetitionMode, count: u32) -> Self {
        self.repetition = repetition;
        self.count = count;
        self
    }
}
