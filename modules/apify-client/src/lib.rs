pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{
    RunData, TikTokAuthor, TikTokHashtag, TikTokHashtagInput, TikTokMusic, TikTokPost,
    YouTubeSearchInput, YouTubeVideo,
};

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor for streamers/youtube-scraper.
const YOUTUBE_SCRAPER: &str = "streamers~youtube-scraper";

/// Actor for clockworks/tiktok-scraper.
const TIKTOK_SCRAPER: &str = "clockworks~tiktok-scraper";

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::api(status.as_u16(), &body));
        }
        Ok(resp)
    }

    /// Start an actor run. Returns immediately with run metadata.
    pub async fn start_run<I: Serialize>(&self, actor: &str, input: &I) -> Result<RunData> {
        let url = format!("{}/acts/{}/runs", self.base_url, actor);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let api_resp: ApiResponse<RunData> = Self::check(resp).await?.json().await?;
        Ok(api_resp.data)
    }

    /// Poll until a run completes. Uses `waitForFinish=60` for efficient long-polling.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let url = format!("{}/actor-runs/{}?waitForFinish=60", self.base_url, run_id);
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?;

            let api_resp: ApiResponse<RunData> = Self::check(resp).await?.json().await?;
            match api_resp.data.status.as_str() {
                "SUCCEEDED" => return Ok(api_resp.data),
                "FAILED" | "ABORTED" | "TIMED-OUT" => {
                    return Err(ApifyError::RunFailed(api_resp.data.status));
                }
                _ => {
                    tracing::debug!(run_id, status = %api_resp.data.status, "Run still in progress");
                    continue;
                }
            }
        }
    }

    /// Fetch dataset items from a completed run.
    pub async fn get_dataset_items<T: DeserializeOwned>(&self, dataset_id: &str) -> Result<Vec<T>> {
        let url = format!("{}/datasets/{}/items?format=json", self.base_url, dataset_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let items: Vec<T> = Self::check(resp).await?.json().await?;
        Ok(items)
    }

    /// Run an actor end-to-end: start run, poll, fetch results.
    pub async fn run_actor<I: Serialize, T: DeserializeOwned>(
        &self,
        actor: &str,
        input: &I,
    ) -> Result<Vec<T>> {
        let run = self.start_run(actor, input).await?;
        tracing::info!(actor, run_id = %run.id, "Apify run started, polling for completion");

        let completed = self.wait_for_run(&run.id).await?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            "Run completed, fetching results"
        );

        self.get_dataset_items(&completed.default_dataset_id).await
    }

    /// Search YouTube by keyword and return the matching videos in ranking order.
    pub async fn scrape_youtube_search(&self, query: &str, limit: u32) -> Result<Vec<YouTubeVideo>> {
        tracing::info!(query, limit, "Starting YouTube search scrape");

        let input = YouTubeSearchInput {
            search_queries: vec![query.to_string()],
            max_results: limit,
            max_results_shorts: 0,
            max_result_streams: 0,
        };

        let videos: Vec<YouTubeVideo> = self.run_actor(YOUTUBE_SCRAPER, &input).await?;
        tracing::info!(count = videos.len(), "Fetched YouTube videos");

        Ok(videos)
    }

    /// Scrape the feed for a TikTok hashtag.
    pub async fn scrape_tiktok_hashtag(&self, hashtag: &str, limit: u32) -> Result<Vec<TikTokPost>> {
        tracing::info!(hashtag, limit, "Starting TikTok hashtag scrape");

        let input = TikTokHashtagInput {
            hashtags: vec![hashtag.trim_start_matches('#').to_string()],
            results_per_page: limit,
        };

        let posts: Vec<TikTokPost> = self.run_actor(TIKTOK_SCRAPER, &input).await?;
        tracing::info!(count = posts.len(), "Fetched TikTok posts");

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn run(status: &str) -> serde_json::Value {
        json!({"data": {"id": "run-1", "status": status, "defaultDatasetId": "ds-1"}})
    }

    async fn mount_poll(server: &MockServer, final_status: &str) {
        Mock::given(method("GET"))
            .and(path("/actor-runs/run-1"))
            .and(query_param("waitForFinish", "60"))
            .respond_with(ResponseTemplate::new(200).set_body_json(run(final_status)))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_scrape_youtube_search_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/acts/{YOUTUBE_SCRAPER}/runs")))
            .and(header("authorization", "Bearer token"))
            .and(body_partial_json(json!({"searchQueries": ["trending music"], "maxResults": 5})))
            .respond_with(ResponseTemplate::new(201).set_body_json(run("READY")))
            .expect(1)
            .mount(&server)
            .await;
        mount_poll(&server, "SUCCEEDED").await;
        Mock::given(method("GET"))
            .and(path("/datasets/ds-1/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"title": "Midnight Drive", "hashtags": ["#newmusic"]},
                {"title": "Summer Haze"}
            ])))
            .mount(&server)
            .await;

        let client = ApifyClient::new("token".into()).with_base_url(server.uri());
        let videos = client.scrape_youtube_search("trending music", 5).await.unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title.as_deref(), Some("Midnight Drive"));
        assert_eq!(videos[0].hashtags, vec!["#newmusic".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_run_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/acts/{TIKTOK_SCRAPER}/runs")))
            .and(body_partial_json(json!({"hashtags": ["music"]})))
            .respond_with(ResponseTemplate::new(201).set_body_json(run("READY")))
            .expect(1)
            .mount(&server)
            .await;
        mount_poll(&server, "FAILED").await;

        let client = ApifyClient::new("token".into()).with_base_url(server.uri());
        let err = client.scrape_tiktok_hashtag("#music", 5).await.unwrap_err();

        assert!(matches!(err, ApifyError::RunFailed(ref s) if s == "FAILED"));
    }

    #[tokio::test]
    async fn test_multiline_error_body_is_flattened() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(502).set_body_string("<html>\n<body>Bad Gateway</body>\n</html>"),
            )
            .mount(&server)
            .await;

        let client = ApifyClient::new("token".into()).with_base_url(server.uri());
        let err = client.scrape_youtube_search("music", 5).await.unwrap_err();

        let rendered = err.to_string();
        assert!(!rendered.contains('\n'));
        assert!(rendered.contains("status 502"));
        assert!(rendered.contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_api_error_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
            .mount(&server)
            .await;

        let client = ApifyClient::new("token".into()).with_base_url(server.uri());
        let err = client.scrape_youtube_search("music", 5).await.unwrap_err();

        match err {
            ApifyError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid token");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
