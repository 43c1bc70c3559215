use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter, Set};
use serde_json::Value as Json;
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::Track, track};

#[derive(Clone)]
pub struct TrackDao {
    db: DatabaseConnection,
}

impl DaoBase for TrackDao {
    type Entity = Track;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TrackDao {
    pub async fn create_track(&self, hunt_id: &Uuid, points: Json) -> DaoResult<track::Model> {
        let model = track::ActiveModel {
            hunt_id: Set(*hunt_id),
            points: Set(points),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_for_hunt(&self, hunt_id: &Uuid) -> DaoResult<Vec<track::Model>> {
        let hunt_id = *hunt_id;
        self.find_iter(
            None,
            Some((track::Column::CreatedAt, Order::Asc)),
            move |query| query.filter(track::Column::HuntId.eq(hunt_id)),
        )
        .collect_all()
        .await
    }
}
