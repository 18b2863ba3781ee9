//! Testing utilities for the Postdeck workspace
//!
//! Shared post fixtures and a scripted `AssetSearch` double that records
//! when and how it was called.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use postdeck_domain::{ContentPillar, ScheduledPost, ShotInstruction};
use postdeck_search::{AssetCandidate, AssetQuery, AssetSearch, SearchError};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Initialize tracing for test output; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A post that qualifies for a preview lookup
pub fn eligible_post(id: i64, topic: &str) -> ScheduledPost {
    ScheduledPost::new(
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        ContentPillar::Education,
        topic,
    )
    .with_id(id)
    .with_hook("hook")
    .with_script("script")
    .with_shot_plan(vec![ShotInstruction::new(format!("{topic} wide shot"), 5)])
}

/// A post whose media has already been rendered
pub fn rendered_post(id: i64, topic: &str) -> ScheduledPost {
    eligible_post(id, topic).with_media_url(format!("https://cdn.example/{id}.mp4"))
}

/// A post that was never persisted (no id)
pub fn unsaved_post(topic: &str) -> ScheduledPost {
    let mut post = eligible_post(0, topic);
    post.id = None;
    post
}

/// Scripted outcome for one topic
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// One candidate carrying this thumbnail URL
    Found(String),
    /// One candidate without a thumbnail URL
    FoundWithoutThumbnail,
    /// Zero candidates
    Empty,
    /// Service error with this status
    Fail(u16),
}

/// One recorded search call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Topic of the query
    pub topic: String,
    /// When the call arrived, in (possibly paused) tokio time
    pub at: Instant,
    /// Result-count limit the caller asked for
    pub max_results: usize,
}

/// `AssetSearch` double answering per topic and recording every call
#[derive(Debug, Default)]
pub struct ScriptedSearch {
    outcomes: Mutex<HashMap<String, ScriptedOutcome>>,
    calls: Mutex<Vec<RecordedCall>>,
    response_delay: Duration,
}

impl ScriptedSearch {
    /// Create double that answers every topic with zero candidates
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome for one topic
    #[must_use]
    pub fn with_outcome(self, topic: impl Into<String>, outcome: ScriptedOutcome) -> Self {
        self.outcomes.lock().insert(topic.into(), outcome);
        self
    }

    /// Delay every answer, simulating a slow service
    #[must_use]
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    /// All recorded calls, in arrival order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Number of calls recorded for one topic
    pub fn calls_for(&self, topic: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.topic == topic).count()
    }
}

#[async_trait]
impl AssetSearch for ScriptedSearch {
    async fn search(&self, query: &AssetQuery) -> Result<Vec<AssetCandidate>, SearchError> {
        self.calls.lock().push(RecordedCall {
            topic: query.topic.clone(),
            at: Instant::now(),
            max_results: query.max_results,
        });

        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }

        let outcome = self.outcomes.lock().get(&query.topic).cloned();
        match outcome {
            Some(ScriptedOutcome::Found(url)) => Ok(vec![
                AssetCandidate::new(format!("asset-{}", query.topic)).with_thumbnail(url),
            ]),
            Some(ScriptedOutcome::FoundWithoutThumbnail) => {
                Ok(vec![AssetCandidate::new(format!("asset-{}", query.topic))])
            }
            Some(ScriptedOutcome::Fail(status)) => Err(SearchError::Service { status }),
            Some(ScriptedOutcome::Empty) | None => Ok(Vec::new()),
        }
    }
}
