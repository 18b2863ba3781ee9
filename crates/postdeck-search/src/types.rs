//! Asset search wire types
//!
//! The query carries a post's full search context; the candidate is the
//! ranked result the service hands back. Only `thumbnail_url` optionality
//! matters to the preview pipeline, the rest is carried for the render flow.

use postdeck_domain::{ScheduledPost, ShotInstruction};
use serde::{Deserialize, Serialize};

/// Contextual search request for one post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetQuery {
    /// Post topic
    pub topic: String,
    /// Opening hook
    pub hook: String,
    /// Full script
    pub script: String,
    /// Ordered shots, each carrying its planned duration
    pub shot_plan: Vec<ShotInstruction>,
    /// Content pillar, wire form
    pub content_pillar: String,
    /// AI-suggested keywords; empty when the post has none
    #[serde(default)]
    pub suggested_keywords: Vec<String>,
    /// Result-count limit
    pub max_results: usize,
}

impl AssetQuery {
    /// Build the search context for a post
    ///
    /// Shots are taken in plan order with their durations intact; keywords
    /// default to the empty sequence.
    #[must_use]
    pub fn for_post(post: &ScheduledPost) -> Self {
        Self {
            topic: post.topic.clone(),
            hook: post.hook.clone(),
            script: post.script.clone(),
            shot_plan: post.shot_plan.clone(),
            content_pillar: post.content_pillar.as_str().to_string(),
            suggested_keywords: post.suggested_keywords.clone(),
            max_results: 12,
        }
    }

    /// With result-count limit
    #[inline]
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// One ranked asset candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCandidate {
    /// Stable asset identifier (usually the asset URL)
    pub id: String,
    /// Preview thumbnail URL, when the asset has one
    pub thumbnail_url: Option<String>,
    /// Full asset URL
    pub video_url: Option<String>,
    /// Asset duration in seconds
    pub duration_seconds: Option<u32>,
}

impl AssetCandidate {
    /// Create candidate with just an id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thumbnail_url: None,
            video_url: None,
            duration_seconds: None,
        }
    }

    /// With thumbnail URL
    #[inline]
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// With asset URL
    #[inline]
    #[must_use]
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// With duration
    #[inline]
    #[must_use]
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }
}
