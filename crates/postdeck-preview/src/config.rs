//! Preview engine configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Preview engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Client-side delay between lookup launch positions
    ///
    /// The lookup at sequence position `k` waits `k × stagger_interval`
    /// before going out. This spreads a pass over the wire without capping
    /// concurrency; launched lookups overlap freely.
    pub stagger_interval: Duration,
    /// Result-count limit per lookup; the engine only ever needs the best
    /// candidate
    pub max_results: usize,
}

impl PreviewConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With stagger interval
    #[inline]
    #[must_use]
    pub fn with_stagger_interval(mut self, interval: Duration) -> Self {
        self.stagger_interval = interval;
        self
    }

    /// With per-lookup result limit
    #[inline]
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            stagger_interval: Duration::from_millis(100),
            max_results: 1,
        }
    }
}
