//! Postdeck Preview - thumbnail acquisition for the calendar view
//!
//! Posts on the calendar that have not been rendered yet still need
//! something to show. This crate owns that pipeline:
//! - derived-key change detection, so unrelated re-renders never refetch
//! - claim-then-fetch in-flight tracking, so overlapping passes never
//!   duplicate a lookup
//! - staggered concurrent lookups against the contextual search capability
//! - one batched cache commit per pass, read back through a pure lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use postdeck_preview::{PreviewConfig, PreviewEngine};
//!
//! # async fn example(search: impl postdeck_search::AssetSearch + 'static,
//! #                  posts: Vec<postdeck_domain::ScheduledPost>) {
//! let engine = PreviewEngine::with_config(search, PreviewConfig::new());
//!
//! let report = engine.refresh(&posts).await;
//! println!("resolved {} previews", report.resolved);
//!
//! if let Some(id) = posts[0].id {
//!     let thumbnail = engine.thumbnail(id);
//! }
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cache;
pub mod config;
pub mod engine;
pub mod inflight;
pub mod key;

// Re-exports for convenience
pub use cache::{CacheStats, PreviewCache};
pub use config::PreviewConfig;
pub use engine::{PassReport, PreviewEngine};
pub use inflight::InflightSet;
pub use key::PassKey;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
