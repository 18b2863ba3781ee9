//! Pass derived key
//!
//! Detects "nothing relevant changed" between trigger invocations. The key
//! is the ordered sequence of each post's (identity, rendered-media-URL)
//! pair; everything else about a post can change without refiring the
//! fetch pipeline. Cache writes never alter a post's media URL, so a pass
//! can not retrigger itself.

use postdeck_domain::ScheduledPost;

/// Derived key of one post list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassKey(Vec<(Option<i64>, Option<String>)>);

impl PassKey {
    /// Derive the key for a post list snapshot
    ///
    /// Posts without an id contribute an empty identity slot so that
    /// ordering stays faithful to the list.
    #[must_use]
    pub fn of(posts: &[ScheduledPost]) -> Self {
        Self(
            posts
                .iter()
                .map(|post| (post.id.map(|id| id.value()), post.media_url.clone()))
                .collect(),
        )
    }

    /// Number of posts the key covers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key covers no posts
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
