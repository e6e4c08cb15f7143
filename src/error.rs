use thiserror::Error;

use crate::models::profile::ProfileError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog URL '{0}'")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("invalid profile: {0}")]
    MalformedProfile(#[from] ProfileError),
    #[error("exercise data unavailable: {0}")]
    DataUnavailable(#[from] StoreError),
}
