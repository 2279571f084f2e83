use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::error::{Result, TrendPostError};

/// Where trending songs are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSource {
    YouTube,
    TikTok,
}

impl TrendSource {
    fn default_query(self) -> &'static str {
        match self {
            TrendSource::YouTube => "trending music",
            TrendSource::TikTok => "music",
        }
    }
}

impl FromStr for TrendSource {
    type Err = TrendPostError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "youtube" => Ok(TrendSource::YouTube),
            "tiktok" => Ok(TrendSource::TikTok),
            other => Err(TrendPostError::Configuration(format!(
                "TREND_SOURCE must be \"youtube\" or \"tiktok\", got {other:?}"
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Passed explicitly into the completion client and trend provider
/// constructors.
#[derive(Debug, Clone)]
pub struct Config {
    // Text completion
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub request_timeout: Duration,

    // Trends
    pub apify_api_key: Option<String>,
    pub trend_source: TrendSource,
    pub trend_query: String,
    pub trend_limit: u32,
    pub hashtag_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY").ok_or_else(|| {
            TrendPostError::Configuration("OPENAI_API_KEY environment variable is required".into())
        })?;

        let trend_source = match get("TREND_SOURCE") {
            Some(value) => value.parse()?,
            None => TrendSource::YouTube,
        };

        Ok(Self {
            openai_api_key,
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-4".to_string()),
            openai_base_url: get("OPENAI_BASE_URL"),
            temperature: parse_or("OPENAI_TEMPERATURE", get("OPENAI_TEMPERATURE"), 0.7)?,
            max_tokens: get("OPENAI_MAX_TOKENS")
                .map(|v| parse("OPENAI_MAX_TOKENS", &v))
                .transpose()?,
            request_timeout: parse_timeout(get("OPENAI_TIMEOUT_SECS"))?,
            apify_api_key: get("APIFY_API_KEY"),
            trend_source,
            trend_query: get("TREND_QUERY")
                .unwrap_or_else(|| trend_source.default_query().to_string()),
            trend_limit: parse_or("TREND_LIMIT", get("TREND_LIMIT"), 20)?,
            hashtag_limit: parse_or("HASHTAG_LIMIT", get("HASHTAG_LIMIT"), 10)?,
        })
    }

    /// Log which keys are set, previewing only the first few characters.
    pub fn log_redacted(&self) {
        fn preview(val: &str) -> String {
            let n = val.chars().count().min(5);
            let head: String = val.chars().take(n).collect();
            format!("{head}...")
        }

        info!(
            openai_api_key = %preview(&self.openai_api_key),
            model = %self.openai_model,
            base_url = self.openai_base_url.as_deref().unwrap_or("default"),
            timeout_secs = self.request_timeout.as_secs(),
            apify_api_key = %self.apify_api_key.as_deref().map(preview).unwrap_or_else(|| "(not set)".into()),
            trend_source = ?self.trend_source,
            trend_query = %self.trend_query,
            "Configuration loaded"
        );
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        TrendPostError::Configuration(format!("{key} has an invalid value: {value:?}"))
    })
}

fn parse_timeout(value: Option<String>) -> Result<Duration> {
    let secs: u64 = parse_or("OPENAI_TIMEOUT_SECS", value, 60)?;
    if secs == 0 {
        return Err(TrendPostError::Configuration(
            "OPENAI_TIMEOUT_SECS must be greater than 0".into(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        Some(v) => parse(key, &v),
        None => Ok(default),
    }
}
