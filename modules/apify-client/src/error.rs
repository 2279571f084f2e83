use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApifyError>;

/// Failures talking to the Apify platform or reading an actor's dataset.
#[derive(Debug, Error)]
pub enum ApifyError {
    #[error("Apify network error: {0}")]
    Network(String),

    #[error("Apify API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Apify response could not be parsed: {0}")]
    Parse(String),

    /// The actor run ended in FAILED, ABORTED or TIMED-OUT.
    #[error("Apify run ended with status {0}")]
    RunFailed(String),
}

/// Longest error body carried into an `ApifyError::Api` message.
const MAX_ERROR_BODY: usize = 500;

impl ApifyError {
    /// API error with the body collapsed onto one line and capped in length.
    pub fn api(status: u16, body: &str) -> Self {
        let joined = body.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut end = joined.len().min(MAX_ERROR_BODY);
        while !joined.is_char_boundary(end) {
            end -= 1;
        }
        ApifyError::Api {
            status,
            message: joined[..end].to_string(),
        }
    }
}

impl From<reqwest::Error> for ApifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApifyError::Parse(err.to_string())
        } else {
            ApifyError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApifyError {
    fn from(err: serde_json::Error) -> Self {
        ApifyError::Parse(err.to_string())
    }
}
