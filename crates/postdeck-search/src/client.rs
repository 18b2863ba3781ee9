//! Search capability traits
//!
//! Two seams: `VideoSearch` is a plain keyword query against a stock-video
//! backend, `AssetSearch` is the contextual capability the preview pipeline
//! consumes. `ShotPlanSearch` bridges the two.

use crate::error::SearchError;
use crate::types::{AssetCandidate, AssetQuery};
use async_trait::async_trait;

/// Contextual asset search capability
///
/// Given a post's full search context, return ranked candidates, best
/// first. Implementations must honor `query.max_results`.
#[async_trait]
pub trait AssetSearch: Send + Sync {
    /// Run one contextual search
    async fn search(&self, query: &AssetQuery) -> Result<Vec<AssetCandidate>, SearchError>;
}

/// Keyword search against a stock-video backend
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search for videos matching a free-text query
    async fn search_videos(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<AssetCandidate>, SearchError>;
}

#[async_trait]
impl<T: AssetSearch + ?Sized> AssetSearch for std::sync::Arc<T> {
    async fn search(&self, query: &AssetQuery) -> Result<Vec<AssetCandidate>, SearchError> {
        (**self).search(query).await
    }
}
