use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::types::*;
use crate::error::{AiError, Result};
use crate::traits::Completion;
use crate::util::one_line;

/// Longest provider error body carried into an `AiError::Api` message.
const MAX_ERROR_BODY: usize = 500;

pub(crate) struct OpenAiClient<'a> {
    api_key: &'a str,
    http: &'a reqwest::Client,
    base_url: &'a str,
    timeout: Option<Duration>,
}

impl<'a> OpenAiClient<'a> {
    pub fn new(api_key: &'a str, http: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self {
            api_key,
            http,
            base_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn headers(&self) -> Result<HeaderMap> {
        if self.api_key.trim().is_empty() {
            return Err(AiError::Config("OpenAI API key is empty".to_string()));
        }
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| AiError::Config(format!("Invalid API key: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Send one chat-completion request and resolve the body into a [`Completion`].
    ///
    /// JSON bodies are read as chat completions. A successful non-JSON body is
    /// returned verbatim as `Completion::Plain`.
    pub async fn chat(&self, request: &ChatRequest) -> Result<Completion> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        debug!(model = %request.model, "OpenAI chat request");

        let mut builder = self.http.post(&url).headers(self.headers()?).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder.send().await?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("json"))
            .unwrap_or(false);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AiError::Api {
                status: status.as_u16(),
                message: one_line(&body, MAX_ERROR_BODY),
            });
        }

        match serde_json::from_str::<ChatResponse>(&body) {
            Ok(chat) => {
                if let Some(ref usage) = chat.usage {
                    debug!(
                        prompt_tokens = usage.prompt_tokens,
                        completion_tokens = usage.completion_tokens,
                        total_tokens = usage.total_tokens,
                        "OpenAI usage"
                    );
                }
                chat.first_content()
                    .map(Completion::structured)
                    .ok_or(AiError::EmptyResponse)
            }
            Err(_) if !is_json && !body.trim().is_empty() => Ok(Completion::plain(body)),
            Err(e) => Err(AiError::Parse(format!(
                "Failed to deserialize chat response: {e}"
            ))),
        }
    }
}
