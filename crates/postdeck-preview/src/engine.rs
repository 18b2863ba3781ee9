//! Preview acquisition engine
//!
//! The per-render batch process behind the calendar view: given the
//! current post list, it decides which posts still need a preview
//! thumbnail, issues deduplicated staggered lookups against the contextual
//! search capability, and commits resolved thumbnails to the session cache
//! in one batch per pass.
//!
//! State discipline: claim before the first suspension point, finalize
//! after, batch-commit results. The in-flight set and cache are owned by
//! the engine; the rendering layer only ever reads the cache through
//! `thumbnail`.

use crate::cache::{CacheStats, PreviewCache};
use crate::config::PreviewConfig;
use crate::inflight::InflightSet;
use crate::key::PassKey;
use parking_lot::Mutex;
use postdeck_domain::{PostId, ScheduledPost};
use postdeck_search::{AssetQuery, AssetSearch, SearchError};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Outcome of one recomputation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Pass was suppressed because the derived key was unchanged
    pub skipped_unchanged: bool,
    /// Lookups claimed and issued this pass
    pub claimed: usize,
    /// Lookups that resolved a thumbnail
    pub resolved: usize,
    /// Lookups that settled without a usable thumbnail
    pub no_result: usize,
    /// Lookups that failed
    pub failed: usize,
}

impl PassReport {
    /// Report for a suppressed pass
    #[inline]
    #[must_use]
    fn unchanged() -> Self {
        Self {
            skipped_unchanged: true,
            ..Self::default()
        }
    }

    /// Whether the pass touched the network at all
    #[inline]
    #[must_use]
    pub fn issued_lookups(&self) -> bool {
        self.claimed > 0
    }
}

/// Session-scoped preview acquisition engine
///
/// One engine instance is bound to one calendar view session. It is
/// created with empty state and dropped, state and all, when the session
/// ends. Nothing else may mutate its in-flight set or cache.
#[derive(Debug)]
pub struct PreviewEngine<S> {
    /// Configuration
    config: PreviewConfig,
    /// Contextual search capability
    search: Arc<S>,
    /// Resolved thumbnails
    cache: PreviewCache,
    /// Identities awaiting a result
    inflight: InflightSet,
    /// Derived key of the previous pass
    last_key: Mutex<Option<PassKey>>,
}

impl<S: AssetSearch + 'static> PreviewEngine<S> {
    /// Create engine with default configuration
    #[inline]
    #[must_use]
    pub fn new(search: S) -> Self {
        Self::with_config(search, PreviewConfig::default())
    }

    /// Create engine with explicit configuration
    #[must_use]
    pub fn with_config(search: S, config: PreviewConfig) -> Self {
        Self {
            config,
            search: Arc::new(search),
            cache: PreviewCache::new(),
            inflight: InflightSet::new(),
            last_key: Mutex::new(None),
        }
    }

    /// Run one recomputation pass over the current post list
    ///
    /// Fires only when the list's derived key changed since the previous
    /// call; an unchanged key returns immediately with zero lookups. For a
    /// changed key, every cache-eligible post not already cached or in
    /// flight is claimed up front, then looked up concurrently with a
    /// fixed per-position stagger. The pass settles when every lookup has
    /// settled, after which all resolved thumbnails land in the cache as
    /// one batch.
    ///
    /// Lookup failures are isolated per post and logged; they never
    /// propagate to the caller.
    pub async fn refresh(&self, posts: &[ScheduledPost]) -> PassReport {
        let key = PassKey::of(posts);
        {
            let mut last = self.last_key.lock();
            if last.as_ref() == Some(&key) {
                return PassReport::unchanged();
            }
            *last = Some(key);
        }

        // Claim the whole pass synchronously, before any lookup goes out.
        // A claim that loses the per-id race belongs to an overlapping pass.
        let mut claimed: Vec<(PostId, AssetQuery)> = Vec::new();
        for post in posts {
            if !post.needs_preview() {
                continue;
            }
            let Some(id) = post.id else {
                continue;
            };
            if self.cache.contains(id) {
                continue;
            }
            if !self.inflight.try_claim(id) {
                continue;
            }
            let query = AssetQuery::for_post(post).with_max_results(self.config.max_results);
            claimed.push((id, query));
        }

        if claimed.is_empty() {
            return PassReport::default();
        }

        let mut report = PassReport {
            claimed: claimed.len(),
            ..PassReport::default()
        };
        tracing::debug!(claimed = report.claimed, "preview pass started");

        let claimed_ids: Vec<PostId> = claimed.iter().map(|(id, _)| *id).collect();
        let stagger = self.config.stagger_interval;

        let mut tasks: JoinSet<(PostId, Result<Option<String>, SearchError>)> = JoinSet::new();
        for (position, (id, query)) in claimed.into_iter().enumerate() {
            let search = Arc::clone(&self.search);
            let delay = stagger * position as u32;
            tasks.spawn(async move {
                tokio::time::sleep(delay).await;
                let outcome = search.search(&query).await.map(|candidates| {
                    candidates
                        .into_iter()
                        .next()
                        .and_then(|candidate| candidate.thumbnail_url)
                });
                (id, outcome)
            });
        }

        // Settle in completion order; ordering between items is irrelevant
        // since the final merge is a map union.
        let mut staged: HashMap<PostId, String> = HashMap::new();
        let mut settled: HashSet<PostId> = HashSet::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((id, outcome)) => {
                    self.inflight.release(id);
                    settled.insert(id);
                    match outcome {
                        Ok(Some(url)) => {
                            staged.insert(id, url);
                            report.resolved += 1;
                        }
                        Ok(None) => {
                            tracing::debug!(post = %id, "no usable preview candidate");
                            report.no_result += 1;
                        }
                        Err(e) => {
                            tracing::warn!(post = %id, error = %e, "preview lookup failed");
                            report.failed += 1;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "preview lookup task did not settle");
                }
            }
        }

        // A task that never settled must still give up its claim.
        for id in claimed_ids {
            if !settled.contains(&id) {
                self.inflight.release(id);
                report.failed += 1;
            }
        }

        self.cache.merge(staged);
        tracing::debug!(
            resolved = report.resolved,
            no_result = report.no_result,
            failed = report.failed,
            "preview pass settled"
        );
        report
    }

    /// Get the cached thumbnail for a post identity
    ///
    /// Pure read for the rendering layer; never triggers a fetch.
    #[inline]
    #[must_use]
    pub fn thumbnail(&self, id: PostId) -> Option<String> {
        self.cache.get(id)
    }

    /// Number of lookups currently outstanding
    #[inline]
    #[must_use]
    pub fn inflight_count(&self) -> usize {
        self.inflight.len()
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }
}
