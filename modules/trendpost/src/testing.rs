// Test doubles for the two external capabilities:
// - StubCompletion (TextCompletion) — scripted reply or error, records prompts
// - StaticTrendProvider (TrendProvider) — fixed snapshot or fixed failure
//
// No network, no API keys.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ai_client::{AiError, Completion, TextCompletion};
use async_trait::async_trait;

use crate::error::{Result, TrendPostError};
use crate::trends::TrendProvider;
use crate::types::TrendSnapshot;

// ---------------------------------------------------------------------------
// StubCompletion
// ---------------------------------------------------------------------------

type ErrorFactory = Box<dyn Fn() -> AiError + Send + Sync>;

enum Reply {
    Success(Completion),
    Failure(ErrorFactory),
}

struct StubInner {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

/// Completion stub. Clones share the prompt log, so a test can hand one
/// clone to the generator and inspect the other.
#[derive(Clone)]
pub struct StubCompletion {
    inner: Arc<StubInner>,
}

impl StubCompletion {
    pub fn replying(completion: Completion) -> Self {
        Self::with_reply(Reply::Success(completion))
    }

    /// `AiError` is not `Clone`, so failures are built fresh per call.
    pub fn failing(make_error: impl Fn() -> AiError + Send + Sync + 'static) -> Self {
        Self::with_reply(Reply::Failure(Box::new(make_error)))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            inner: Arc::new(StubInner {
                reply,
                prompts: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.inner.prompts.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.inner.prompts.lock().unwrap().last().cloned()
    }

    pub fn calls(&self) -> usize {
        self.inner.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextCompletion for StubCompletion {
    async fn complete(&self, prompt: &str) -> ai_client::Result<Completion> {
        self.inner.prompts.lock().unwrap().push(prompt.to_string());
        match &self.inner.reply {
            Reply::Success(completion) => Ok(completion.clone()),
            Reply::Failure(make_error) => Err(make_error()),
        }
    }
}

// ---------------------------------------------------------------------------
// StaticTrendProvider
// ---------------------------------------------------------------------------

pub struct StaticTrendProvider {
    outcome: std::result::Result<TrendSnapshot, String>,
    fetches: AtomicUsize,
}

impl StaticTrendProvider {
    pub fn new(snapshot: TrendSnapshot) -> Self {
        Self {
            outcome: Ok(snapshot),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn from_titles(hashtags: &[&str], titles: &[&str]) -> Self {
        Self::new(TrendSnapshot::new(
            hashtags.iter().map(|s| s.to_string()).collect(),
            titles.iter().map(|s| s.to_string()).collect(),
        ))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrendProvider for StaticTrendProvider {
    async fn fetch_trends(&self) -> Result<TrendSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(TrendPostError::TrendFetch)
    }
}
