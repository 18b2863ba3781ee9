//! HTTP stock-video search client
//!
//! Thin client for a Pexels-style video search API: keyword query in, a
//! page of videos out, each with an image thumbnail and a set of encoded
//! files. Results that match the configured exclusion terms are dropped,
//! and the page size is over-requested to leave room for that filtering.

use crate::client::VideoSearch;
use crate::error::SearchError;
use crate::types::AssetCandidate;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default request timeout, matching the dashboard backend's client
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest page the backend accepts
const MAX_PAGE_SIZE: usize = 80;

/// Stock-video search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// API base URL (the `/search` path is appended)
    pub base_url: String,
    /// API key sent in the `Authorization` header
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Terms appended as negative query hints and used to drop results
    pub exclude_terms: Vec<String>,
}

impl SearchConfig {
    /// Create configuration for an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.pexels.com/videos".to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            exclude_terms: Vec::new(),
        }
    }

    /// With API base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// With exclusion terms
    #[inline]
    #[must_use]
    pub fn with_exclude_terms(mut self, terms: Vec<String>) -> Self {
        self.exclude_terms = terms;
        self
    }

    /// Preset excluding people and faces from results
    #[must_use]
    pub fn no_people(self) -> Self {
        self.with_exclude_terms(
            ["person", "people", "face", "woman", "man", "portrait", "crowd"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

/// HTTP client implementing `VideoSearch`
#[derive(Debug, Clone)]
pub struct HttpVideoSearch {
    config: SearchConfig,
    client: reqwest::Client,
}

impl HttpVideoSearch {
    /// Create client from configuration
    ///
    /// # Errors
    /// `SearchError::Transport` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Query string with negative hints appended
    fn effective_query(&self, query: &str) -> String {
        let mut q = query.to_string();
        for term in &self.config.exclude_terms {
            q.push_str(" -");
            q.push_str(term);
        }
        q
    }
}

#[async_trait]
impl VideoSearch for HttpVideoSearch {
    async fn search_videos(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<AssetCandidate>, SearchError> {
        // Over-request to leave room for exclusion filtering
        let per_page = (max_results * 2).clamp(1, MAX_PAGE_SIZE);

        let response = self
            .client
            .get(format!("{}/search", self.config.base_url))
            .header("Authorization", &self.config.api_key)
            .query(&[
                ("query", self.effective_query(query).as_str()),
                ("per_page", per_page.to_string().as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Service {
                status: status.as_u16(),
            });
        }

        let body: WireSearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        let candidates = candidates_from_response(body, &self.config.exclude_terms, max_results);
        tracing::debug!(query = %query, found = candidates.len(), "video search completed");
        Ok(candidates)
    }
}

/// Wire shape of the search response
#[derive(Debug, Deserialize)]
struct WireSearchResponse {
    #[serde(default)]
    videos: Vec<WireVideo>,
}

#[derive(Debug, Deserialize)]
struct WireVideo {
    id: u64,
    #[serde(default)]
    url: String,
    /// Thumbnail image URL
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    video_files: Vec<WireVideoFile>,
}

#[derive(Debug, Deserialize)]
struct WireVideoFile {
    link: String,
    #[serde(default)]
    quality: Option<String>,
}

/// Convert a response page into candidates, applying exclusion filtering
/// and preferring HD encodes
fn candidates_from_response(
    body: WireSearchResponse,
    exclude_terms: &[String],
    max_results: usize,
) -> Vec<AssetCandidate> {
    let mut out = Vec::new();

    for video in body.videos {
        let text = format!(
            "{} {} {}",
            video.url.to_lowercase(),
            video.id,
            video.alt.as_deref().unwrap_or("").to_lowercase()
        );
        if exclude_terms.iter().any(|term| text.contains(term.as_str())) {
            continue;
        }

        // Prefer HD, fall back to whatever encode exists
        let file = video
            .video_files
            .iter()
            .find(|f| f.quality.as_deref() == Some("hd"))
            .or_else(|| video.video_files.first());
        let Some(file) = file else {
            continue;
        };

        let mut candidate = AssetCandidate::new(file.link.clone()).with_video_url(file.link.clone());
        if let Some(image) = video.image {
            candidate = candidate.with_thumbnail(image);
        }
        if let Some(duration) = video.duration {
            candidate = candidate.with_duration(duration);
        }
        out.push(candidate);

        if out.len() >= max_results {
            break;
        }
    }

    out
}
