//! Scheduled post types
//!
//! Defines the fundamental types for the posting calendar:
//! - Post identity
//! - Shot plan instructions
//! - Content pillars and lifecycle status
//! - The scheduled post itself, with preview eligibility

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Unique post identifier
///
/// Posts are keyed by the integer id assigned by the dashboard database.
/// Posts that have not been persisted yet carry no id and are invisible to
/// the preview pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostId(pub i64);

impl PostId {
    /// Create post id from raw database id
    #[inline]
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get raw id value
    #[inline]
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Instruction for a single video shot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotInstruction {
    /// What the shot should show
    pub description: String,
    /// Intended shot length in seconds
    pub duration_seconds: u32,
}

impl ShotInstruction {
    /// Create new shot instruction
    #[inline]
    #[must_use]
    pub fn new(description: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            description: description.into(),
            duration_seconds,
        }
    }
}

/// Content pillar classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentPillar {
    /// Educational content
    Education,
    /// Day-in-the-life / routine content
    Routine,
    /// Storytelling content
    Story,
    /// Product integration content
    ProductIntegration,
}

impl ContentPillar {
    /// Stable string form used on the wire and in queries
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentPillar::Education => "education",
            ContentPillar::Routine => "routine",
            ContentPillar::Story => "story",
            ContentPillar::ProductIntegration => "product_integration",
        }
    }
}

impl std::fmt::Display for ContentPillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Generated but not reviewed
    Draft,
    /// Reviewed and ready to schedule
    Ready,
    /// Scheduled for publishing
    Scheduled,
    /// Published to platforms
    Published,
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Draft
    }
}

/// Rendered media template type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    /// Static image post
    Image,
    /// Video post
    Video,
}

/// A post on the weekly calendar
///
/// Mirrors the dashboard's `scheduled_posts` row. The content fields
/// (`topic`, `hook`, `script`, `shot_plan`, `content_pillar`,
/// `suggested_keywords`) double as the search context when the post lacks
/// rendered media and a preview thumbnail has to be looked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPost {
    /// Database id; `None` until the post is persisted
    pub id: Option<PostId>,
    /// Calendar date
    pub post_date: NaiveDate,
    /// Optional posting time
    pub post_time: Option<NaiveTime>,
    /// Content pillar
    pub content_pillar: ContentPillar,
    /// Optional series this post belongs to
    pub series_name: Option<String>,
    /// Post topic
    pub topic: String,
    /// Opening hook
    pub hook: String,
    /// Full script
    pub script: String,
    /// Platform caption
    pub caption: String,
    /// Rendered media template type
    pub template_type: TemplateType,
    /// Ordered shot plan
    #[serde(default)]
    pub shot_plan: Vec<ShotInstruction>,
    /// AI-suggested search keywords
    #[serde(default)]
    pub suggested_keywords: Vec<String>,
    /// Rendered media URL, once the post has been rendered
    pub media_url: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: PostStatus,
}

impl ScheduledPost {
    /// Create new draft post for a calendar date
    #[must_use]
    pub fn new(post_date: NaiveDate, content_pillar: ContentPillar, topic: impl Into<String>) -> Self {
        Self {
            id: None,
            post_date,
            post_time: None,
            content_pillar,
            series_name: None,
            topic: topic.into(),
            hook: String::new(),
            script: String::new(),
            caption: String::new(),
            template_type: TemplateType::Video,
            shot_plan: Vec::new(),
            suggested_keywords: Vec::new(),
            media_url: None,
            status: PostStatus::Draft,
        }
    }

    /// With database id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(PostId::new(id));
        self
    }

    /// With hook
    #[inline]
    #[must_use]
    pub fn with_hook(mut self, hook: impl Into<String>) -> Self {
        self.hook = hook.into();
        self
    }

    /// With script
    #[inline]
    #[must_use]
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    /// With caption
    #[inline]
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// With series name
    #[inline]
    #[must_use]
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series_name = Some(series.into());
        self
    }

    /// With shot plan
    #[inline]
    #[must_use]
    pub fn with_shot_plan(mut self, shot_plan: Vec<ShotInstruction>) -> Self {
        self.shot_plan = shot_plan;
        self
    }

    /// With suggested keywords
    #[inline]
    #[must_use]
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.suggested_keywords = keywords;
        self
    }

    /// With rendered media URL
    #[inline]
    #[must_use]
    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the post already has usable rendered media
    ///
    /// An empty string in `media_url` counts as no media; drafts round-trip
    /// through forms that way.
    #[inline]
    #[must_use]
    pub fn has_media(&self) -> bool {
        self.media_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Whether the post qualifies for a preview thumbnail lookup
    ///
    /// A post needs a preview iff it has a persisted id, no rendered media,
    /// and at least one shot to search with. Everything else the preview
    /// pipeline does is filtered on top of this.
    #[inline]
    #[must_use]
    pub fn needs_preview(&self) -> bool {
        self.id.is_some() && !self.has_media() && !self.shot_plan.is_empty()
    }
}
