use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common core failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed fiscal payload: {0}")]
    MalformedFiscalPayload(String),
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),
    #[error("Series not found: {0}")]
    SeriesNotFound(Uuid),
}
