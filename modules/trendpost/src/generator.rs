use ai_client::TextCompletion;
use tracing::{debug, info};

use crate::error::Result;
use crate::length::{truncate, word_limit_for};
use crate::prompt::build_prompt;
use crate::types::{GenerationRequest, Post};

/// Prompt → completion → word-limit pipeline.
///
/// Every `generate` call makes exactly one completion request. Nothing is
/// cached, so identical requests may produce different posts.
pub struct ContentGenerator<C> {
    completion: C,
}

impl<C: TextCompletion> ContentGenerator<C> {
    pub fn new(completion: C) -> Self {
        Self { completion }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Post> {
        let limit = word_limit_for(request.length_class());
        let prompt = build_prompt(request);

        debug!(
            song = request.song_title(),
            platform = request.platform(),
            prompt_chars = prompt.len(),
            "Requesting completion"
        );

        let completion = self.completion.complete(&prompt).await?;
        let post = Post::from(truncate(completion.as_text(), limit));

        info!(
            song = request.song_title(),
            platform = request.platform(),
            word_limit = limit,
            words = post.word_count(),
            "Post generated"
        );

        Ok(post)
    }
}
