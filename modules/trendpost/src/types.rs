use std::fmt;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Everything needed to generate one post. Built by whichever front end
/// drives generation; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct GenerationRequest {
    #[builder(setter(into))]
    song_title: String,
    #[builder(setter(into))]
    platform: String,
    #[builder(default = String::from("neutral"), setter(into))]
    tone: String,
    #[builder(default = String::from("short"), setter(into))]
    length_class: String,
    #[builder(default)]
    hashtags: Vec<String>,
}

impl GenerationRequest {
    pub fn song_title(&self) -> &str {
        &self.song_title
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn length_class(&self) -> &str {
        &self.length_class
    }

    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }
}

/// One fetched batch of trending hashtags and titles. Only valid for the run
/// that fetched it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSnapshot {
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub titles: Vec<String>,
}

impl TrendSnapshot {
    pub fn new(hashtags: Vec<String>, titles: Vec<String>) -> Self {
        Self { hashtags, titles }
    }

    /// Title at a 1-based position, as shown to the user.
    pub fn title(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.titles.get(i))
            .map(String::as_str)
    }
}

/// Final, length-limited post text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post(String);

impl Post {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl From<String> for Post {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
