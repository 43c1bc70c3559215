use chrono::NaiveDate;
use sea_orm::Set;
use serde_json::json;
use uuid::Uuid;

use hunt_log::{
    db::{
        dao::{DaoBase, DaoLayerError, HuntChanges, HuntQuery},
        entities::{StringList, hunt},
    },
    test_helpers,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).expect("valid date")
}

#[tokio::test]
async fn hunt_without_user_is_rejected_by_the_engine() {
    let daos = test_helpers::sqlite_daos().await.expect("sqlite db");
    let orphan = hunt::ActiveModel {
        title: Set("Dawn sit".to_string()),
        date: Set(day(3)),
        start_time: Set(chrono::NaiveTime::from_hms_opt(5, 45, 0).expect("valid time")),
        location: Set(json!({ "name": "Blind 4" })),
        game_type: Set(StringList::new()),
        game_seen: Set(json!([])),
        game_harvested: Set(json!([])),
        tags: Set(StringList::new()),
        ..Default::default()
    };

    let err = daos
        .hunt()
        .create(orphan)
        .await
        .expect_err("insert without user_id should fail");
    assert!(matches!(err, DaoLayerError::Db(_)));
    assert!(err.to_string().contains("NOT NULL"), "unexpected error: {err}");
}

#[tokio::test]
async fn defaults_apply_when_omitted() {
    let daos = test_helpers::sqlite_daos().await.expect("sqlite db");
    let owner = test_helpers::user(&daos, "ola@example.com").await.expect("user");

    let hunt = test_helpers::hunt(&daos, &owner.id, "Grouse walk")
        .await
        .expect("hunt");
    assert!(hunt.game_type.is_empty());
    assert!(hunt.tags.is_empty());
    assert!(!hunt.is_favorite);
    assert_eq!(hunt.game_seen, json!([]));
    assert_eq!(hunt.created_at, hunt.updated_at);

    let stored = daos.hunt().find_hunt(&hunt.id).await.expect("stored hunt");
    assert_eq!(stored, hunt);

    let dog = test_helpers::dog(&daos, &owner.id, "Tass").await.expect("dog");
    assert!(dog.is_active);

    let bare = hunt::ActiveModel {
        user_id: Set(owner.id),
        title: Set("Evening sit".to_string()),
        date: Set(day(4)),
        start_time: Set(chrono::NaiveTime::from_hms_opt(17, 0, 0).expect("valid time")),
        location: Set(json!({ "name": "Blind 2" })),
        ..Default::default()
    };
    let bare = daos.hunt().create(bare).await.expect("bare hunt");
    assert!(bare.game_type.is_empty());
    assert!(bare.tags.is_empty());
    assert_eq!(bare.game_seen, json!([]));
    assert_eq!(bare.game_harvested, json!([]));
    assert!(!bare.is_favorite);
}

#[tokio::test]
async fn photo_with_unknown_hunt_violates_foreign_key() {
    let daos = test_helpers::sqlite_daos().await.expect("sqlite db");

    let err = test_helpers::photo(&daos, &Uuid::new_v4(), "stray.jpg")
        .await
        .expect_err("photo without hunt should fail");
    assert!(err.is_foreign_key_violation(), "unexpected error: {err}");
}

#[tokio::test]
async fn linking_the_same_dog_twice_violates_uniqueness() {
    let daos = test_helpers::sqlite_daos().await.expect("sqlite db");
    let owner = test_helpers::user(&daos, "kari@example.com").await.expect("user");
    let hunt = test_helpers::hunt(&daos, &owner.id, "Hare drive").await.expect("hunt");
    let dog = test_helpers::dog(&daos, &owner.id, "Bamse").await.expect("dog");

    daos.hunt_dog()
        .attach(&hunt.id, &dog.id)
        .await
        .expect("first link");
    let err = daos
        .hunt_dog()
        .attach(&hunt.id, &dog.id)
        .await
        .expect_err("second link should fail");
    assert!(err.is_unique_violation(), "unexpected error: {err}");
    assert!(daos.hunt_dog().is_attached(&hunt.id, &dog.id).await.expect("lookup"));
}

#[tokio::test]
async fn updates_keep_created_at_and_advance_updated_at() {
    let daos = test_helpers::sqlite_daos().await.expect("sqlite db");
    let owner = test_helpers::user(&daos, "per@example.com").await.expect("user");
    let created = test_helpers::hunt(&daos, &owner.id, "Moose stand")
        .await
        .expect("hunt");

    let first = daos
        .hunt()
        .update_hunt(
            &created.id,
            HuntChanges {
                notes: Some(Some("Cold wind from the north".to_string())),
                ..HuntChanges::default()
            },
        )
        .await
        .expect("first update");
    let second = daos
        .hunt()
        .toggle_favorite(&created.id)
        .await
        .expect("second update");

    assert_eq!(first.created_at, created.created_at);
    assert_eq!(second.created_at, created.created_at);
    assert!(first.updated_at > created.updated_at);
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.notes.as_deref(), Some("Cold wind from the north"));
    assert!(second.is_favorite);
}

#[tokio::test]
async fn photo_updates_leave_created_at_alone() {
    let daos = test_helpers::sqlite_daos().await.expect("sqlite db");
    let owner = test_helpers::user(&daos, "siri@example.com").await.expect("user");
    let hunt = test_helpers::hunt(&daos, &owner.id, "Duck pass").await.expect("hunt");
    let photo = test_helpers::photo(&daos, &hunt.id, "teal.jpg").await.expect("photo");

    let captioned = daos
        .photo()
        .update_caption(&photo.id, Some("Green-winged teal".to_string()))
        .await
        .expect("caption");
    assert_eq!(captioned.created_at, photo.created_at);
    assert_eq!(captioned.caption.as_deref(), Some("Green-winged teal"));
}

#[tokio::test]
async fn list_hunts_applies_filters_and_rejects_bad_pages() {
    let daos = test_helpers::sqlite_daos().await.expect("sqlite db");
    let owner = test_helpers::user(&daos, "eva@example.com").await.expect("user");
    let other = test_helpers::user(&daos, "nils@example.com").await.expect("user");

    for (title, d) in [("Early grouse", 1), ("Late grouse", 20), ("Deer watch", 10)] {
        daos.hunt()
            .create_hunt(test_helpers::new_hunt(owner.id, title, day(d)))
            .await
            .expect("hunt");
    }
    daos.hunt()
        .create_hunt(test_helpers::new_hunt(other.id, "Other grouse", day(10)))
        .await
        .expect("hunt");

    let all = daos
        .hunt()
        .list_hunts(&HuntQuery::for_user(owner.id), 1, 10)
        .await
        .expect("list");
    let titles: Vec<_> = all.data.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, ["Late grouse", "Deer watch", "Early grouse"]);
    assert!(!all.has_next);

    let query = HuntQuery {
        date_from: Some(day(5)),
        title_contains: Some("grouse".to_string()),
        ..HuntQuery::for_user(owner.id)
    };
    let filtered = daos.hunt().list_hunts(&query, 1, 10).await.expect("list");
    assert_eq!(filtered.data.len(), 1);
    assert_eq!(filtered.data[0].title, "Late grouse");

    let paged = daos
        .hunt()
        .list_hunts(&HuntQuery::for_user(owner.id), 1, 2)
        .await
        .expect("list");
    assert_eq!(paged.data.len(), 2);
    assert!(paged.has_next);

    let err = daos
        .hunt()
        .list_hunts(&HuntQuery::default(), 0, 10)
        .await
        .expect_err("page 0 should be rejected");
    assert!(matches!(err, DaoLayerError::InvalidPagination { page: 0, .. }));

    assert_eq!(daos.hunt().count_by_user(&owner.id).await.expect("count"), 3);
}

#[tokio::test]
async fn same_day_hunts_list_most_recently_recorded_first() {
    let daos = test_helpers::sqlite_daos().await.expect("sqlite db");
    let owner = test_helpers::user(&daos, "liv@example.com").await.expect("user");
    for title in ["Morning", "Midday", "Evening"] {
        daos.hunt()
            .create_hunt(test_helpers::new_hunt(owner.id, title, day(12)))
            .await
            .expect("hunt");
    }
    daos.hunt()
        .create_hunt(test_helpers::new_hunt(owner.id, "Day before", day(11)))
        .await
        .expect("hunt");

    let listed = daos
        .hunt()
        .list_hunts(&HuntQuery::for_user(owner.id), 1, 10)
        .await
        .expect("list");
    let titles: Vec<_> = listed.data.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, ["Evening", "Midday", "Morning", "Day before"]);

    let first = daos
        .hunt()
        .list_hunts(&HuntQuery::for_user(owner.id), 1, 2)
        .await
        .expect("page 1");
    let second = daos
        .hunt()
        .list_hunts(&HuntQuery::for_user(owner.id), 2, 2)
        .await
        .expect("page 2");
    let paged: Vec<_> = first
        .data
        .iter()
        .chain(second.data.iter())
        .map(|h| h.title.as_str())
        .collect();
    assert_eq!(paged, titles);
}
