pub mod dashboard_service;
pub mod entry_service;
pub mod fiscal_service;

pub use dashboard_service::DashboardService;
pub use entry_service::EntryService;
pub use fiscal_service::FiscalService;

use crate::errors::CoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    Invalid(String),
}
