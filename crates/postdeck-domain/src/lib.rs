//! Postdeck Domain - scheduled-post model
//!
//! Shared domain types for the posting dashboard:
//! - Scheduled posts and their content fields
//! - Weekly schedules anchored to Mondays
//! - Preview eligibility (`ScheduledPost::needs_preview`)
//!
//! # Example
//!
//! ```rust
//! use postdeck_domain::{ContentPillar, ScheduledPost, ShotInstruction};
//!
//! let post = ScheduledPost::new(
//!     chrono::NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//!     ContentPillar::Education,
//!     "morning routine",
//! )
//! .with_id(1)
//! .with_shot_plan(vec![ShotInstruction::new("sunrise timelapse", 4)]);
//!
//! assert!(post.needs_preview());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod post;
pub mod schedule;

// Re-exports for convenience
pub use post::{
    ContentPillar, PostId, PostStatus, ScheduledPost, ShotInstruction, TemplateType,
};
pub use schedule::{monday_of, ScheduleStatus, WeeklySchedule};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
