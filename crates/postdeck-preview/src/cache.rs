//! Preview thumbnail cache
//!
//! Maps post identity to a resolved thumbnail URL for the lifetime of one
//! calendar session. Reads are pure; writes land as one batched merge per
//! fetch pass so the rendering layer sees at most one cache change per
//! pass.

use parking_lot::RwLock;
use postdeck_domain::PostId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached thumbnails
    pub entry_count: usize,
    /// Number of batched merges applied
    pub commit_count: u64,
}

/// Session-scoped thumbnail cache
///
/// Entries never expire; the cache is dropped with the engine when the
/// calendar session ends. A later merge for an existing identity silently
/// overwrites, though the engine never re-requests a cached identity.
#[derive(Debug, Default)]
pub struct PreviewCache {
    inner: RwLock<HashMap<PostId, String>>,
    commits: AtomicU64,
}

impl PreviewCache {
    /// Create empty cache
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get cached thumbnail URL
    ///
    /// Pure lookup; never triggers a fetch.
    #[inline]
    #[must_use]
    pub fn get(&self, id: PostId) -> Option<String> {
        self.inner.read().get(&id).cloned()
    }

    /// Check if an identity is cached
    #[inline]
    #[must_use]
    pub fn contains(&self, id: PostId) -> bool {
        self.inner.read().contains_key(&id)
    }

    /// Merge one pass's resolved thumbnails in a single batched commit
    ///
    /// An empty batch is a no-op and does not count as a commit.
    pub fn merge(&self, batch: HashMap<PostId, String>) {
        if batch.is_empty() {
            return;
        }
        let mut inner = self.inner.write();
        inner.extend(batch);
        self.commits.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of cached thumbnails
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the cache is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.len(),
            commit_count: self.commits.load(Ordering::Relaxed),
        }
    }
}
