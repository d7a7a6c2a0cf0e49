pub mod alerts;
pub mod forecast;
pub mod metrics;
pub mod recurrence;

pub use alerts::prioritize;
pub use forecast::{forecast, DEFAULT_HORIZON_DAYS};
pub use metrics::compute_monthly;
pub use recurrence::{add_months, expand};
