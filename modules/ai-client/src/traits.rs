use async_trait::async_trait;

use crate::error::Result;

// =============================================================================
// Completion
// =============================================================================

/// What a text-completion call returned, resolved by the client adapter.
///
/// Providers that speak the chat-completions JSON format yield `Structured`;
/// endpoints that answer with a bare body (some proxies, local servers) yield
/// `Plain`. Callers only ever need the text, via [`Completion::into_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Structured { text: String },
    Plain { value: String },
}

impl Completion {
    pub fn structured(text: impl Into<String>) -> Self {
        Self::Structured { text: text.into() }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain {
            value: value.into(),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Structured { text } => text,
            Self::Plain { value } => value,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Structured { text } => text,
            Self::Plain { value } => value,
        }
    }
}

// =============================================================================
// TextCompletion Trait
// =============================================================================

/// A single prompt in, a single completion out. One call is one outbound
/// request; implementations must not retry or cache.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Completion>;
}

#[async_trait]
impl<T: TextCompletion + ?Sized> TextCompletion for std::sync::Arc<T> {
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        (**self).complete(prompt).await
    }
}
