use chrono::NaiveDate;
use postdeck_domain::{ContentPillar, ScheduledPost, ShotInstruction};
use proptest::prelude::*;

fn media_url_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z]{1,12}".prop_map(|s| Some(format!("https://cdn.example/{s}.mp4"))),
    ]
}

proptest! {
    #[test]
    fn needs_preview_matches_its_definition(
        has_id in any::<bool>(),
        id in 1i64..10_000,
        media_url in media_url_strategy(),
        shot_count in 0usize..4,
    ) {
        let mut post = ScheduledPost::new(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            ContentPillar::Story,
            "topic",
        );
        if has_id {
            post = post.with_id(id);
        }
        post.media_url = media_url.clone();
        post.shot_plan = (0..shot_count)
            .map(|i| ShotInstruction::new(format!("shot {i}"), 3))
            .collect();

        let has_media = media_url.as_deref().is_some_and(|u| !u.is_empty());
        let expected = has_id && !has_media && shot_count > 0;
        prop_assert_eq!(post.needs_preview(), expected);
    }
}
