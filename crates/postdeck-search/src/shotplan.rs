//! Shot-plan driven contextual search
//!
//! Implements `AssetSearch` the way the dashboard backend does: one stock
//! search per shot description, best match per shot, deduplicated across
//! the plan. A failed shot query never sinks its siblings.

use crate::client::{AssetSearch, VideoSearch};
use crate::error::SearchError;
use crate::types::{AssetCandidate, AssetQuery};
use async_trait::async_trait;
use std::collections::HashSet;

/// Contextual search composed from per-shot keyword queries
#[derive(Debug, Clone)]
pub struct ShotPlanSearch<V> {
    backend: V,
}

impl<V: VideoSearch> ShotPlanSearch<V> {
    /// Create shot-plan search over a stock-video backend
    #[inline]
    #[must_use]
    pub fn new(backend: V) -> Self {
        Self { backend }
    }

    /// Get backend reference
    #[inline]
    #[must_use]
    pub fn backend(&self) -> &V {
        &self.backend
    }
}

#[async_trait]
impl<V: VideoSearch> AssetSearch for ShotPlanSearch<V> {
    /// Search one shot at a time, collecting the best match per shot
    ///
    /// Empty descriptions are skipped, duplicate assets (same id from two
    /// shots) are kept once, and the result is capped at
    /// `query.max_results`. Each match carries its shot's planned duration,
    /// not the stock asset's own length. A shot whose query errors is
    /// logged and skipped.
    async fn search(&self, query: &AssetQuery) -> Result<Vec<AssetCandidate>, SearchError> {
        let mut results: Vec<AssetCandidate> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for shot in query.shot_plan.iter().take(query.max_results) {
            if shot.description.is_empty() {
                continue;
            }

            match self.backend.search_videos(&shot.description, 1).await {
                Ok(candidates) => {
                    if let Some(mut candidate) = candidates.into_iter().next() {
                        if seen_ids.insert(candidate.id.clone()) {
                            candidate.duration_seconds = Some(shot.duration_seconds);
                            tracing::debug!(shot = %shot.description, asset = %candidate.id, "matched shot");
                            results.push(candidate);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(shot = %shot.description, error = %e, "shot query failed, skipping");
                    continue;
                }
            }

            if results.len() >= query.max_results {
                break;
            }
        }

        results.truncate(query.max_results);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postdeck_domain::ShotInstruction;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend double answering from a fixed query -> candidates table
    struct TableBackend {
        answers: HashMap<String, Result<Vec<AssetCandidate>, u16>>,
        calls: AtomicUsize,
    }

    impl TableBackend {
        fn new(answers: HashMap<String, Result<Vec<AssetCandidate>, u16>>) -> Self {
            Self {
                answers,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VideoSearch for TableBackend {
        async fn search_videos(
            &self,
            query: &str,
            _max_results: usize,
        ) -> Result<Vec<AssetCandidate>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.answers.get(query) {
                Some(Ok(candidates)) => Ok(candidates.clone()),
                Some(Err(status)) => Err(SearchError::Service { status: *status }),
                None => Ok(Vec::new()),
            }
        }
    }

    fn query_for(shots: &[&str], max_results: usize) -> AssetQuery {
        AssetQuery {
            topic: "t".to_string(),
            hook: "h".to_string(),
            script: "s".to_string(),
            shot_plan: shots.iter().map(|s| ShotInstruction::new(*s, 4)).collect(),
            content_pillar: "education".to_string(),
            suggested_keywords: Vec::new(),
            max_results,
        }
    }

    #[tokio::test]
    async fn collects_best_match_per_shot() {
        let mut answers = HashMap::new();
        answers.insert(
            "sunrise".to_string(),
            Ok(vec![AssetCandidate::new("a").with_thumbnail("a.jpg")]),
        );
        answers.insert(
            "city".to_string(),
            Ok(vec![AssetCandidate::new("b").with_thumbnail("b.jpg")]),
        );
        let search = ShotPlanSearch::new(TableBackend::new(answers));

        let results = search.search(&query_for(&["sunrise", "city"], 12)).await.unwrap();
        let ids: Vec<&str> = results.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn planned_shot_duration_overrides_asset_duration() {
        let mut answers = HashMap::new();
        answers.insert(
            "sunrise".to_string(),
            Ok(vec![AssetCandidate::new("a").with_thumbnail("a.jpg").with_duration(30)]),
        );
        answers.insert("city".to_string(), Ok(vec![AssetCandidate::new("b")]));
        let search = ShotPlanSearch::new(TableBackend::new(answers));

        let mut query = query_for(&["sunrise", "city"], 12);
        query.shot_plan = vec![
            ShotInstruction::new("sunrise", 4),
            ShotInstruction::new("city", 7),
        ];

        let results = search.search(&query).await.unwrap();
        // The render pipeline clips to the plan, so the stock asset's own
        // length is replaced by the shot's.
        assert_eq!(results[0].duration_seconds, Some(4));
        assert_eq!(results[1].duration_seconds, Some(7));
    }

    #[tokio::test]
    async fn deduplicates_across_shots() {
        let mut answers = HashMap::new();
        answers.insert("sunrise".to_string(), Ok(vec![AssetCandidate::new("a")]));
        answers.insert("dawn".to_string(), Ok(vec![AssetCandidate::new("a")]));
        let search = ShotPlanSearch::new(TableBackend::new(answers));

        let results = search.search(&query_for(&["sunrise", "dawn"], 12)).await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn failed_shot_does_not_sink_siblings() {
        let mut answers = HashMap::new();
        answers.insert("broken".to_string(), Err(503));
        answers.insert("city".to_string(), Ok(vec![AssetCandidate::new("b")]));
        let search = ShotPlanSearch::new(TableBackend::new(answers));

        let results = search.search(&query_for(&["broken", "city"], 12)).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "b");
    }

    #[tokio::test]
    async fn skips_empty_descriptions() {
        let answers = HashMap::new();
        let backend = TableBackend::new(answers);
        let search = ShotPlanSearch::new(backend);

        let results = search.search(&query_for(&["", ""], 12)).await.unwrap();
        assert!(results.is_empty());
        assert_eq!(search.backend().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn stops_at_max_results() {
        let mut answers = HashMap::new();
        answers.insert("one".to_string(), Ok(vec![AssetCandidate::new("a")]));
        answers.insert("two".to_string(), Ok(vec![AssetCandidate::new("b")]));
        answers.insert("three".to_string(), Ok(vec![AssetCandidate::new("c")]));
        let search = ShotPlanSearch::new(TableBackend::new(answers));

        let results = search
            .search(&query_for(&["one", "two", "three"], 1))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        // Only the shots needed for one result were queried
        assert_eq!(search.backend().calls.load(Ordering::SeqCst), 1);
    }
}
