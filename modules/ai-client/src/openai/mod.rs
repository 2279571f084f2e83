mod client;
pub(crate) mod types;

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::error::{AiError, Result};
use crate::traits::{Completion, TextCompletion};
use client::OpenAiClient;

const OPENAI_API_URL: &str = "https://api.openai.com/v1";

// =============================================================================
// OpenAi Client
// =============================================================================

/// Chat-completions client. Construct once and reuse; the underlying
/// connection pool is shared by every call.
#[derive(Clone)]
pub struct OpenAi {
    api_key: String,
    pub(crate) model: String,
    base_url: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    timeout: Option<Duration>,
    http: reqwest::Client,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            temperature: None,
            max_tokens: None,
            timeout: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AiError::Config("OPENAI_API_KEY environment variable not set".into()))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Per-request timeout applied to every completion call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get the model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> OpenAiClient<'_> {
        OpenAiClient::new(
            &self.api_key,
            &self.http,
            self.base_url.as_deref().unwrap_or(OPENAI_API_URL),
        )
        .with_timeout(self.timeout)
    }

    fn request(&self, prompt: &str) -> types::ChatRequest {
        let mut request =
            types::ChatRequest::new(&self.model).message(types::WireMessage::user(prompt));

        if types::uses_max_completion_tokens(&self.model) {
            if let Some(max) = self.max_tokens {
                request = request.max_completion_tokens(max);
            }
        } else {
            if let Some(max) = self.max_tokens {
                request = request.max_tokens(max);
            }
            if let Some(temp) = self.temperature {
                request = request.temperature(temp);
            }
        }

        request
    }
}

// =============================================================================
// TextCompletion Implementation
// =============================================================================

#[async_trait]
impl TextCompletion for OpenAi {
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        let request = self.request(prompt);
        let completion = self.client().chat(&request).await?;
        info!(
            model = %self.model,
            chars = completion.as_text().len(),
            "Completion received"
        );
        Ok(completion)
    }
}
