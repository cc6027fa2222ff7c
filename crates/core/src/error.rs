#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP status {0}")]
    Status(u16),
    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend reported an error: {0}")]
    Backend(String),
}

pub type UiResult<T> = std::result::Result<T, UiError>;
