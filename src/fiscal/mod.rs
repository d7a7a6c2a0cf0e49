pub mod normalizer;
pub mod payload;

pub use normalizer::{normalize, DEFAULT_AVERAGE_MONTHLY_GUIDE};
pub use payload::FiscalPayload;
