//! Error handling for the resume insight application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeInsightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resume text could not be extracted or is empty")]
    EmptyInput,

    #[error("Job index not available: {0}")]
    ModelUnavailable(String),

    #[error("No roles could be discovered for this profile")]
    NoCandidates,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, ResumeInsightError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeInsightError {
    fn from(err: anyhow::Error) -> Self {
        ResumeInsightError::Processing(err.to_string())
    }
}
