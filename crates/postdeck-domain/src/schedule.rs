//! Weekly schedule types
//!
//! A schedule is a Monday-anchored week of posts. The calendar view renders
//! one schedule at a time and feeds its posts to the preview pipeline.

use crate::post::ScheduledPost;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schedule review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Generated but not reviewed
    Draft,
    /// Approved by the user
    Approved,
    /// All posts scheduled
    Scheduled,
}

impl Default for ScheduleStatus {
    fn default() -> Self {
        ScheduleStatus::Draft
    }
}

/// A week of scheduled posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Database id; `None` until persisted
    pub id: Option<i64>,
    /// Monday of the week
    pub week_start_date: NaiveDate,
    /// Review status
    #[serde(default)]
    pub status: ScheduleStatus,
    /// Posts in calendar order
    #[serde(default)]
    pub posts: Vec<ScheduledPost>,
}

impl WeeklySchedule {
    /// Create empty schedule anchored to the week containing `date`
    #[must_use]
    pub fn week_of(date: NaiveDate) -> Self {
        Self {
            id: None,
            week_start_date: monday_of(date),
            status: ScheduleStatus::Draft,
            posts: Vec::new(),
        }
    }

    /// With posts
    #[inline]
    #[must_use]
    pub fn with_posts(mut self, posts: Vec<ScheduledPost>) -> Self {
        self.posts = posts;
        self
    }

    /// Sunday of the week
    #[inline]
    #[must_use]
    pub fn week_end_date(&self) -> NaiveDate {
        self.week_start_date + Duration::days(6)
    }

    /// Count posts per series name
    ///
    /// Posts without a series are not counted.
    #[must_use]
    pub fn series_breakdown(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for post in &self.posts {
            if let Some(series) = &post.series_name {
                *counts.entry(series.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Monday of the week containing `date`
#[must_use]
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_since_monday = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(days_since_monday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::ContentPillar;
    use chrono::Weekday;

    #[test]
    fn monday_of_normalizes_mid_week() {
        // 2024-06-05 is a Wednesday
        let wed = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let mon = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(monday_of(wed), mon);
        assert_eq!(monday_of(mon), mon);
        assert_eq!(mon.weekday(), Weekday::Mon);
    }

    #[test]
    fn week_of_spans_seven_days() {
        let schedule = WeeklySchedule::week_of(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
        assert_eq!(schedule.week_start_date.weekday(), Weekday::Mon);
        assert_eq!(
            schedule.week_end_date(),
            schedule.week_start_date + Duration::days(6)
        );
    }

    #[test]
    fn series_breakdown_counts_named_series() {
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let posts = vec![
            ScheduledPost::new(monday, ContentPillar::Education, "a").with_series("Myths"),
            ScheduledPost::new(monday, ContentPillar::Story, "b").with_series("Myths"),
            ScheduledPost::new(monday, ContentPillar::Routine, "c"),
        ];
        let schedule = WeeklySchedule::week_of(monday).with_posts(posts);

        let breakdown = schedule.series_breakdown();
        assert_eq!(breakdown.get("Myths"), Some(&2));
        assert_eq!(breakdown.len(), 1);
    }
}
