//! Error handling for the career-readiness engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerReadinessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed profile record: {0}")]
    MalformedRecord(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, CareerReadinessError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CareerReadinessError {
    fn from(err: anyhow::Error) -> Self {
        CareerReadinessError::AnalysisFailed(err.to_string())
    }
}
