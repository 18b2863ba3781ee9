//! Error types for asset search
//!
//! Covers the two ways a lookup can go wrong: the transport fails, or the
//! service answers with something unusable. Empty result sets are not
//! errors; callers treat "no usable asset" as an ordinary outcome.

/// Asset search error
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("search transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("search service returned status {status}")]
    Service {
        /// HTTP status code
        status: u16,
    },

    /// Response body could not be decoded
    #[error("search response could not be decoded: {0}")]
    Decode(String),
}

impl SearchError {
    /// Whether a later identical request could plausibly succeed
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            SearchError::Transport(_) => true,
            SearchError::Service { status } => *status >= 500 || *status == 429,
            SearchError::Decode(_) => false,
        }
    }
}
