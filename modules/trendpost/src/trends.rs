use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use apify_client::{ApifyClient, TikTokPost, YouTubeVideo};
use async_trait::async_trait;
use regex::Regex;
use tracing::{info, warn};

use crate::config::{Config, TrendSource};
use crate::error::{Result, TrendPostError};
use crate::types::TrendSnapshot;

static RE_HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[\p{L}\p{N}_]+").unwrap());

// ---------------------------------------------------------------------------
// TrendProvider
// ---------------------------------------------------------------------------

/// Supplies the trending hashtags and song titles for one run.
#[async_trait]
pub trait TrendProvider: Send + Sync {
    async fn fetch_trends(&self) -> Result<TrendSnapshot>;
}

#[async_trait]
impl<T: TrendProvider + ?Sized> TrendProvider for Box<T> {
    async fn fetch_trends(&self) -> Result<TrendSnapshot> {
        (**self).fetch_trends().await
    }
}

#[async_trait]
impl<T: TrendProvider + ?Sized> TrendProvider for std::sync::Arc<T> {
    async fn fetch_trends(&self) -> Result<TrendSnapshot> {
        (**self).fetch_trends().await
    }
}

// ---------------------------------------------------------------------------
// Apify-backed provider
// ---------------------------------------------------------------------------

pub struct ApifyTrendProvider {
    client: ApifyClient,
    source: TrendSource,
    query: String,
    limit: u32,
    hashtag_limit: usize,
}

impl ApifyTrendProvider {
    pub fn new(
        client: ApifyClient,
        source: TrendSource,
        query: impl Into<String>,
        limit: u32,
        hashtag_limit: usize,
    ) -> Self {
        Self {
            client,
            source,
            query: query.into(),
            limit,
            hashtag_limit,
        }
    }

    /// Requires `APIFY_API_KEY`; its absence is a configuration error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.apify_api_key.clone().ok_or_else(|| {
            TrendPostError::Configuration(
                "APIFY_API_KEY environment variable is required to fetch trends".into(),
            )
        })?;
        Ok(Self::new(
            ApifyClient::new(token),
            config.trend_source,
            config.trend_query.clone(),
            config.trend_limit,
            config.hashtag_limit,
        ))
    }

    fn snapshot_from_youtube(&self, videos: Vec<YouTubeVideo>) -> TrendSnapshot {
        let mut titles = Vec::new();
        let mut tags = Vec::new();

        for video in videos {
            tags.extend(video.hashtags);
            if let Some(text) = video.text.as_deref() {
                tags.extend(extract_hashtags(text));
            }
            if let Some(title) = video.title {
                let title = title.trim();
                if !title.is_empty() {
                    tags.extend(extract_hashtags(title));
                    titles.push(title.to_string());
                }
            }
        }

        TrendSnapshot::new(rank_hashtags(tags, self.hashtag_limit), titles)
    }

    fn snapshot_from_tiktok(&self, posts: Vec<TikTokPost>) -> TrendSnapshot {
        let mut titles = Vec::new();
        let mut tags = Vec::new();

        for post in posts {
            if let Some(title) = post.song_title() {
                titles.push(title);
            }
            tags.extend(post.hashtags.into_iter().filter_map(|h| h.name));
            if let Some(text) = post.text.as_deref() {
                tags.extend(extract_hashtags(text));
            }
        }

        TrendSnapshot::new(rank_hashtags(tags, self.hashtag_limit), titles)
    }
}

#[async_trait]
impl TrendProvider for ApifyTrendProvider {
    async fn fetch_trends(&self) -> Result<TrendSnapshot> {
        let snapshot = match self.source {
            TrendSource::YouTube => {
                let videos = self
                    .client
                    .scrape_youtube_search(&self.query, self.limit)
                    .await?;
                self.snapshot_from_youtube(videos)
            }
            TrendSource::TikTok => {
                let posts = self
                    .client
                    .scrape_tiktok_hashtag(&self.query, self.limit)
                    .await?;
                self.snapshot_from_tiktok(posts)
            }
        };

        if snapshot.titles.is_empty() {
            return Err(TrendPostError::TrendFetch(format!(
                "no trending titles found for {:?}",
                self.query
            )));
        }

        info!(
            source = ?self.source,
            titles = snapshot.titles.len(),
            hashtags = snapshot.hashtags.len(),
            "Fetched trends"
        );
        Ok(snapshot)
    }
}

// ---------------------------------------------------------------------------
// File-backed provider
// ---------------------------------------------------------------------------

/// Reads a saved snapshot: `{"hashtags": [...], "titles": [...]}`.
pub struct FileTrendProvider {
    path: PathBuf,
}

impl FileTrendProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TrendProvider for FileTrendProvider {
    async fn fetch_trends(&self) -> Result<TrendSnapshot> {
        let path_str = self.path.display().to_string();
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| TrendPostError::TrendFetch(format!("cannot read {path_str}: {e}")))?;
        let snapshot: TrendSnapshot = serde_json::from_str(&json)
            .map_err(|e| TrendPostError::TrendFetch(format!("cannot parse {path_str}: {e}")))?;

        if snapshot.titles.is_empty() {
            warn!(path = %path_str, "Trends file has no titles");
            return Err(TrendPostError::TrendFetch(format!(
                "no trending titles in {path_str}"
            )));
        }

        info!(path = %path_str, titles = snapshot.titles.len(), "Loaded trends from file");
        Ok(snapshot)
    }
}

// ---------------------------------------------------------------------------
// Hashtag helpers
// ---------------------------------------------------------------------------

/// All `#tag` tokens in a piece of text, in order of appearance.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    RE_HASHTAG
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Most common hashtags first, at most `limit` of them.
///
/// Tags are normalised to a leading `#` and counted case-insensitively; the
/// first spelling seen is the one kept. Ties keep first-seen order.
pub fn rank_hashtags(tags: impl IntoIterator<Item = String>, limit: usize) -> Vec<String> {
    // key -> (count, first_seen, spelling)
    let mut counts: HashMap<String, (usize, usize, String)> = HashMap::new();

    for (position, tag) in tags.into_iter().enumerate() {
        let bare = tag.trim().trim_start_matches('#');
        if bare.is_empty() {
            continue;
        }
        let entry = counts
            .entry(bare.to_lowercase())
            .or_insert_with(|| (0, position, format!("#{bare}")));
        entry.0 += 1;
    }

    let mut ranked: Vec<_> = counts.into_values().collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(_, _, tag)| tag)
        .collect()
}
