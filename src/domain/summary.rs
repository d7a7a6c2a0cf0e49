use serde::{Deserialize, Serialize};

/// Derived cash position for one calendar month. Recomputed on demand, never
/// persisted.
///
/// `realized_balance` and `projected_balance` net revenue against expense;
/// `overdue_amount` and `upcoming_amount` sum raw pending amounts of both
/// kinds. The buckets measure exposure, the balances measure solvency, so
/// the asymmetry is intended.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyMetrics {
    pub realized_balance: f64,
    pub pending_receivable: f64,
    pub pending_payable: f64,
    pub projected_balance: f64,
    pub overdue_amount: f64,
    pub upcoming_amount: f64,
}

/// Result of the forward cash walk.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiquidityForecast {
    pub is_projected_negative: bool,
    /// 1-based day offset of the first negative crossing (tomorrow = 1).
    /// Only meaningful when `is_projected_negative` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_negative: Option<u32>,
}
