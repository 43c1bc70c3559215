//! Fixtures for tests that need a real engine: an in-memory SQLite database with the
//! schema synced and foreign keys enforced, plus builders for the common rows.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;
use serde_json::json;
use uuid::Uuid;

use crate::{
    config::DatabaseConfig,
    db::{
        connection,
        dao::{DaoContext, DaoResult, NewHunt, NewPhoto},
        entities::{StringList, dog, hunt, photo, user},
    },
};

pub async fn sqlite_db() -> anyhow::Result<DatabaseConnection> {
    connection::connect(&DatabaseConfig::in_memory_sqlite()).await
}

pub async fn sqlite_daos() -> anyhow::Result<DaoContext> {
    let db = sqlite_db().await?;
    Ok(DaoContext::new(&db))
}

pub async fn user(daos: &DaoContext, email: &str) -> DaoResult<user::Model> {
    daos.user().create_user(email, None).await
}

pub async fn dog(daos: &DaoContext, owner: &Uuid, name: &str) -> DaoResult<dog::Model> {
    daos.dog().create_dog(owner, name, None).await
}

pub fn new_hunt(user_id: Uuid, title: &str, date: NaiveDate) -> NewHunt {
    NewHunt::new(
        user_id,
        title,
        date,
        NaiveTime::from_hms_opt(6, 30, 0).expect("valid time"),
        json!({ "name": "North ridge", "lat": 61.5, "lng": 10.2 }),
    )
}

pub async fn hunt(daos: &DaoContext, user_id: &Uuid, title: &str) -> DaoResult<hunt::Model> {
    let date = NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date");
    daos.hunt().create_hunt(new_hunt(*user_id, title, date)).await
}

pub fn new_photo(hunt_id: Uuid, filename: &str) -> NewPhoto {
    NewPhoto {
        hunt_id,
        filename: filename.to_string(),
        original_filename: filename.to_uppercase(),
        file_size: 1_024,
        mime_type: "image/jpeg".to_string(),
        url: format!("https://cdn.example.com/{filename}"),
        thumbnail_url: format!("https://cdn.example.com/thumb/{filename}"),
        caption: None,
        taken_at: None,
        location: None,
        exif_data: None,
        tags: StringList::new(),
    }
}

pub async fn photo(daos: &DaoContext, hunt_id: &Uuid, filename: &str) -> DaoResult<photo::Model> {
    daos.photo().create_photo(new_photo(*hunt_id, filename)).await
}
