use thiserror::Error;
use crate::error::FetchError;

/// Everything that can stop a report run. Logged once by `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Failed to render report: {0}")]
    Render(serde_json::Error),
}
