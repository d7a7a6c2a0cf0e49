use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived standing of one DAS payment guide relative to a reference date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GuideStatus {
    Paid,
    Overdue,
    Upcoming,
    /// No settlement indication and no parsable due date.
    Pending,
}

/// One monthly DAS guide as reported by the tax authority. Monetary fields
/// keep the source's locale-formatted strings and are parsed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DasGuide {
    pub year: i32,
    pub period: String,
    pub principal: String,
    pub fine: String,
    pub interest: String,
    pub total: String,
    /// Due date as reported (day/month/year text).
    pub due_date_text: String,
    pub raw_status: String,
    pub status: GuideStatus,
    /// Parsed form of `due_date_text`, when parsable.
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeclarationStatus {
    Filed,
    NotApplicable,
    Pending,
}

/// One DASN annual declaration record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DasnDeclaration {
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_date: Option<String>,
    pub raw_status: String,
    pub status: DeclarationStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FiscalStanding {
    Regular,
    Irregular,
}

/// Normalized picture of the company's fiscal situation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FiscalDiagnosis {
    pub guides: Vec<DasGuide>,
    pub declarations: Vec<DasnDeclaration>,
    /// Sum of overdue guide totals plus any synthesized estimates.
    pub total_estimated_debt: f64,
    pub pending_declaration_count: usize,
    pub overall_status: FiscalStanding,
    /// Set when any synthesized debt was added for years with no guides on file.
    pub is_estimated: bool,
}

impl FiscalDiagnosis {
    pub fn overdue_guide_count(&self) -> usize {
        self.guides
            .iter()
            .filter(|guide| guide.status == GuideStatus::Overdue)
            .count()
    }
}
