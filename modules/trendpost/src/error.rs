use ai_client::AiError;
use apify_client::ApifyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrendPostError>;

#[derive(Debug, Error)]
pub enum TrendPostError {
    /// Missing or invalid configuration, raised before any network call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to fetch trends: {0}")]
    TrendFetch(String),

    /// The text-completion call failed. Never retried.
    #[error("Text completion failed: {0}")]
    ExternalService(#[from] AiError),

    #[error("Invalid selection {input:?}: choose a number between 1 and {available}")]
    InvalidSelection { input: String, available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApifyError> for TrendPostError {
    fn from(err: ApifyError) -> Self {
        TrendPostError::TrendFetch(err.to_string())
    }
}
