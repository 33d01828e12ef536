use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Response status: {0}")]
    StatusError(u16),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Body is not valid JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
