use chrono::NaiveDate;

use crate::config::Config;
use crate::domain::fiscal::FiscalDiagnosis;
use crate::fiscal;
use crate::storage::FiscalDataSource;

use super::ServiceResult;

pub struct FiscalService;

impl FiscalService {
    /// Fetches the company's raw fiscal payload and normalizes it. A failure
    /// here means "diagnosis unavailable" and must surface to the caller;
    /// it is never an all-clear.
    pub fn diagnose(
        source: &dyn FiscalDataSource,
        tax_id: &str,
        reference: NaiveDate,
        config: &Config,
    ) -> ServiceResult<FiscalDiagnosis> {
        let raw = source.fetch_fiscal_payload(tax_id)?;
        let diagnosis = fiscal::normalize(&raw, reference, config.average_monthly_guide)?;
        Ok(diagnosis)
    }
}
