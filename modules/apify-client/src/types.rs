use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

// --- YouTube search scraper types ---

/// Input for the streamers/youtube-scraper actor (keyword search).
#[derive(Debug, Clone, Serialize)]
pub struct YouTubeSearchInput {
    #[serde(rename = "searchQueries")]
    pub search_queries: Vec<String>,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
    #[serde(rename = "maxResultsShorts")]
    pub max_results_shorts: u32,
    #[serde(rename = "maxResultStreams")]
    pub max_result_streams: u32,
}

/// A single YouTube video from the Apify dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeVideo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    /// Video description.
    pub text: Option<String>,
    #[serde(rename = "channelName")]
    pub channel_name: Option<String>,
    #[serde(rename = "viewCount")]
    pub view_count: Option<i64>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub date: Option<String>,
}

// --- TikTok hashtag scraper types ---

/// Input for the clockworks/tiktok-scraper actor (hashtag feeds).
#[derive(Debug, Clone, Serialize)]
pub struct TikTokHashtagInput {
    pub hashtags: Vec<String>,
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

/// A single TikTok post from the Apify dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokPost {
    pub id: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "webVideoUrl")]
    pub web_video_url: Option<String>,
    #[serde(rename = "createTimeISO")]
    pub create_time_iso: Option<String>,
    #[serde(rename = "authorMeta")]
    pub author_meta: Option<TikTokAuthor>,
    #[serde(rename = "musicMeta")]
    pub music_meta: Option<TikTokMusic>,
    #[serde(rename = "playCount")]
    pub play_count: Option<i64>,
    #[serde(default)]
    pub hashtags: Vec<TikTokHashtag>,
}

impl TikTokPost {
    /// "Song - Artist" when the post carries music metadata, else the caption.
    pub fn song_title(&self) -> Option<String> {
        let music = self.music_meta.as_ref();
        let name = music
            .and_then(|m| m.music_name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty());
        match name {
            Some(name) => {
                let author = music
                    .and_then(|m| m.music_author.as_deref())
                    .map(str::trim)
                    .filter(|a| !a.is_empty());
                Some(match author {
                    Some(author) => format!("{name} - {author}"),
                    None => name.to_string(),
                })
            }
            None => self
                .text
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        }
    }
}

/// Author metadata from a TikTok post.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokAuthor {
    pub name: Option<String>,
    #[serde(rename = "nickName")]
    pub nick_name: Option<String>,
}

/// Sound metadata from a TikTok post.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokMusic {
    #[serde(rename = "musicName")]
    pub music_name: Option<String>,
    #[serde(rename = "musicAuthor")]
    pub music_author: Option<String>,
}

/// A hashtag reference in a TikTok post.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokHashtag {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_video_missing_hashtags_defaults_empty() {
        let video: YouTubeVideo =
            serde_json::from_str(r#"{"title": "Midnight Drive", "viewCount": 1200}"#).unwrap();
        assert_eq!(video.title.as_deref(), Some("Midnight Drive"));
        assert!(video.hashtags.is_empty());
    }

    #[test]
    fn test_tiktok_song_title_prefers_music_meta() {
        let post: TikTokPost = serde_json::from_str(
            r#"{
                "text": "dancing all night #fyp",
                "musicMeta": {"musicName": "Midnight Drive", "musicAuthor": "The Nightcrawlers"},
                "hashtags": [{"name": "fyp"}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            post.song_title().as_deref(),
            Some("Midnight Drive - The Nightcrawlers")
        );
    }

    #[test]
    fn test_tiktok_song_title_falls_back_to_caption() {
        let post: TikTokPost =
            serde_json::from_str(r#"{"text": "  new track out now  ", "musicMeta": {"musicName": ""}}"#)
                .unwrap();
        assert_eq!(post.song_title().as_deref(), Some("new track out now"));
    }
}
