//! In-flight lookup tracking
//!
//! A set of post identities currently awaiting a lookup result. Claims are
//! per-identity atomic, so two overlapping passes can never both claim the
//! same post.

use dashmap::DashMap;
use postdeck_domain::PostId;

/// Identities with an outstanding lookup
#[derive(Debug, Default)]
pub struct InflightSet {
    inner: DashMap<PostId, ()>,
}

impl InflightSet {
    /// Create empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an identity for this pass
    ///
    /// Returns `false` when the identity is already in flight; the caller
    /// must then leave it alone.
    #[inline]
    #[must_use]
    pub fn try_claim(&self, id: PostId) -> bool {
        self.inner.insert(id, ()).is_none()
    }

    /// Release an identity, regardless of lookup outcome
    #[inline]
    pub fn release(&self, id: PostId) {
        self.inner.remove(&id);
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, id: PostId) -> bool {
        self.inner.contains_key(&id)
    }

    /// Number of outstanding lookups
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether nothing is in flight
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
