//! Postdeck Search - contextual asset lookup
//!
//! The capability layer between the dashboard and stock-asset providers:
//! - `AssetQuery` / `AssetCandidate` wire types
//! - `AssetSearch` (contextual) and `VideoSearch` (keyword) trait seams
//! - `ShotPlanSearch`, which answers a contextual query one shot at a time
//! - `HttpVideoSearch`, a Pexels-style HTTP backend
//!
//! # Example
//!
//! ```rust,ignore
//! use postdeck_search::{AssetQuery, HttpVideoSearch, SearchConfig, ShotPlanSearch};
//! use postdeck_search::AssetSearch;
//!
//! # async fn example(post: &postdeck_domain::ScheduledPost) -> Result<(), Box<dyn std::error::Error>> {
//! let backend = HttpVideoSearch::new(SearchConfig::new("api-key").no_people())?;
//! let search = ShotPlanSearch::new(backend);
//!
//! let query = AssetQuery::for_post(post).with_max_results(1);
//! let candidates = search.search(&query).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod error;
pub mod http;
pub mod shotplan;
pub mod types;

// Re-exports for convenience
pub use client::{AssetSearch, VideoSearch};
pub use error::SearchError;
pub use http::{HttpVideoSearch, SearchConfig};
pub use shotplan::ShotPlanSearch;
pub use types::{AssetCandidate, AssetQuery};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
