pub mod alert;
pub mod entry;
pub mod fiscal;
pub mod summary;

pub use alert::{Alert, AlertKind, AlertSeverity, AlertTarget};
pub use entry::{EntryKind, EntryStatus, Installment, LedgerEntry, RepetitionMode, SeriesRequest};
pub use fiscal::{
    DasGuide, DasnDeclaration, DeclarationStatus, FiscalDiagnosis, FiscalStanding, GuideStatus,
};
pub use summary::{LiquidityForecast, MonthlyMetrics};
