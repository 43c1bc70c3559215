use sea_orm::{ColumnTrait, DatabaseConnection, IntoActiveModel, Order, QueryFilter, Set};
use serde_json::Value as Json;
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{StringList, photo, prelude::Photo};

#[derive(Debug, Clone, PartialEq)]
pub struct NewPhoto {
    pub hunt_id: Uuid,
    pub filename: String,
    pub original_filename: String,
    pub file_size: i32,
    pub mime_type: String,
    pub url: String,
    pub thumbnail_url: String,
    pub caption: Option<String>,
    pub taken_at: Option<chrono::DateTime<chrono::FixedOffset>>,
    pub location: Option<Json>,
    pub exif_data: Option<Json>,
    pub tags: StringList,
}

impl IntoActiveModel<photo::ActiveModel> for NewPhoto {
    fn into_active_model(self) -> photo::ActiveModel {
        photo::ActiveModel {
            hunt_id: Set(self.hunt_id),
            filename: Set(self.filename),
            original_filename: Set(self.original_filename),
            file_size: Set(self.file_size),
            mime_type: Set(self.mime_type),
            url: Set(self.url),
            thumbnail_url: Set(self.thumbnail_url),
            caption: Set(self.caption),
            taken_at: Set(self.taken_at),
            location: Set(self.location),
            exif_data: Set(self.exif_data),
            tags: Set(self.tags),
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct PhotoDao {
    db: DatabaseConnection,
}

impl DaoBase for PhotoDao {
    type Entity = Photo;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PhotoDao {
    pub async fn create_photo(&self, new_photo: NewPhoto) -> DaoResult<photo::Model> {
        self.create(new_photo).await
    }

    pub async fn find_photo(&self, id: &Uuid) -> DaoResult<photo::Model> {
        self.find_by_id(*id).await
    }

    /// Upload order.
    pub async fn list_photos(&self, hunt_id: &Uuid) -> DaoResult<Vec<photo::Model>> {
        let hunt_id = *hunt_id;
        self.find_iter(
            None,
            Some((photo::Column::CreatedAt, Order::Asc)),
            move |query| query.filter(photo::Column::HuntId.eq(hunt_id)),
        )
        .collect_all()
        .await
    }

    // Photos carry no update timestamp; these only rewrite the column.
    pub async fn update_caption(
        &self,
        id: &Uuid,
        caption: Option<String>,
    ) -> DaoResult<photo::Model> {
        self.update(*id, move |active| {
            active.caption = Set(caption);
        })
        .await
    }

    pub async fn set_tags(&self, id: &Uuid, tags: StringList) -> DaoResult<photo::Model> {
        self.update(*id, move |active| {
            active.tags = Set(tags);
        })
        .await
    }

    pub async fn delete_photo(&self, id: &Uuid) -> DaoResult<Uuid> {
        self.delete(*id).await
    }

    pub async fn count_by_hunt(&self, hunt_id: &Uuid) -> DaoResult<u64> {
        let hunt_id = *hunt_id;
        self.count(move |select| select.filter(photo::Column::HuntId.eq(hunt_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::PhotoDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::{StringList, photo};

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn photo_model(id: Uuid, hunt_id: Uuid, caption: Option<&str>) -> photo::Model {
        photo::Model {
            id,
            created_at: ts(),
            hunt_id,
            filename: format!("{id}.jpg"),
            original_filename: "IMG_0042.JPG".to_string(),
            file_size: 2_048_000,
            mime_type: "image/jpeg".to_string(),
            url: format!("https://cdn.example.com/{id}.jpg"),
            thumbnail_url: format!("https://cdn.example.com/{id}_thumb.jpg"),
            caption: caption.map(str::to_string),
            taken_at: None,
            location: None,
            exif_data: None,
            tags: StringList::new(),
        }
    }

    #[tokio::test]
    async fn list_photos_walks_every_page() {
        let hunt_id = Uuid::new_v4();
        let first_page: Vec<photo::Model> = (0..=PhotoDao::MAX_PAGE_SIZE)
            .map(|_| photo_model(Uuid::new_v4(), hunt_id, None))
            .collect();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                first_page,
                vec![photo_model(Uuid::new_v4(), hunt_id, None)],
            ])
            .into_connection();
        let dao = PhotoDao::new(&db);

        let photos = dao
            .list_photos(&hunt_id)
            .await
            .expect("query should succeed");
        assert_eq!(photos.len() as u64, PhotoDao::MAX_PAGE_SIZE + 1);
        assert!(photos.iter().all(|photo| photo.hunt_id == hunt_id));
    }

    #[tokio::test]
    async fn update_caption_returns_the_stored_row() {
        let id = Uuid::new_v4();
        let hunt_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                [photo_model(id, hunt_id, None)],
                [photo_model(id, hunt_id, Some("First light"))],
            ])
            .into_connection();
        let dao = PhotoDao::new(&db);

        let photo = dao
            .update_caption(&id, Some("First light".to_string()))
            .await
            .expect("update should succeed");
        assert_eq!(photo.caption.as_deref(), Some("First light"));
        assert_eq!(photo.created_at, ts());
    }

    #[tokio::test]
    async fn set_tags_propagates_not_found() {
        let missing_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<photo::Model>::new()])
            .into_connection();
        let dao = PhotoDao::new(&db);

        let err = dao
            .set_tags(&missing_id, ["trophy"].into_iter().collect())
            .await
            .expect_err("update should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { id, .. } if id == missing_id
        ));
    }
}
