use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, IntoActiveModel, Order, QueryFilter, QueryOrder,
    Set, sea_query::Value,
};
use serde_json::{Value as Json, json};
use uuid::Uuid;

use super::{ColumnFilter, CompareOp, DaoBase, DaoResult, FilterOp, PaginatedResponse};
use crate::db::entities::{StringList, hunt, prelude::Hunt};

/// Everything needed to record a hunt. Optional collections fall back to empty values.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHunt {
    pub user_id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub location: Json,
    pub weather: Option<Json>,
    pub game_type: StringList,
    pub game_seen: Option<Json>,
    pub game_harvested: Option<Json>,
    pub notes: Option<String>,
    pub summary: Option<String>,
    pub tags: StringList,
    pub is_favorite: bool,
}

impl NewHunt {
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        location: Json,
    ) -> Self {
        Self {
            user_id,
            title: title.into(),
            date,
            start_time,
            end_time: None,
            location,
            weather: None,
            game_type: StringList::new(),
            game_seen: None,
            game_harvested: None,
            notes: None,
            summary: None,
            tags: StringList::new(),
            is_favorite: false,
        }
    }
}

impl IntoActiveModel<hunt::ActiveModel> for NewHunt {
    fn into_active_model(self) -> hunt::ActiveModel {
        hunt::ActiveModel {
            user_id: Set(self.user_id),
            title: Set(self.title),
            date: Set(self.date),
            start_time: Set(self.start_time),
            end_time: Set(self.end_time),
            location: Set(self.location),
            weather: Set(self.weather),
            game_type: Set(self.game_type),
            game_seen: Set(self.game_seen.unwrap_or_else(empty_json_list)),
            game_harvested: Set(self.game_harvested.unwrap_or_else(empty_json_list)),
            notes: Set(self.notes),
            summary: Set(self.summary),
            tags: Set(self.tags),
            is_favorite: Set(self.is_favorite),
            ..Default::default()
        }
    }
}

fn empty_json_list() -> Json {
    json!([])
}

/// Column updates for an existing hunt. `None` leaves a column untouched; for nullable
/// columns `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HuntChanges {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<Option<NaiveTime>>,
    pub location: Option<Json>,
    pub weather: Option<Option<Json>>,
    pub game_type: Option<StringList>,
    pub game_seen: Option<Json>,
    pub game_harvested: Option<Json>,
    pub notes: Option<Option<String>>,
    pub summary: Option<Option<String>>,
    pub tags: Option<StringList>,
    pub is_favorite: Option<bool>,
}

impl HuntChanges {
    fn apply(self, active: &mut hunt::ActiveModel) {
        if let Some(title) = self.title {
            active.title = Set(title);
        }
        if let Some(date) = self.date {
            active.date = Set(date);
        }
        if let Some(start_time) = self.start_time {
            active.start_time = Set(start_time);
        }
        if let Some(end_time) = self.end_time {
            active.end_time = Set(end_time);
        }
        if let Some(location) = self.location {
            active.location = Set(location);
        }
        if let Some(weather) = self.weather {
            active.weather = Set(weather);
        }
        if let Some(game_type) = self.game_type {
            active.game_type = Set(game_type);
        }
        if let Some(game_seen) = self.game_seen {
            active.game_seen = Set(game_seen);
        }
        if let Some(game_harvested) = self.game_harvested {
            active.game_harvested = Set(game_harvested);
        }
        if let Some(notes) = self.notes {
            active.notes = Set(notes);
        }
        if let Some(summary) = self.summary {
            active.summary = Set(summary);
        }
        if let Some(tags) = self.tags {
            active.tags = Set(tags);
        }
        if let Some(is_favorite) = self.is_favorite {
            active.is_favorite = Set(is_favorite);
        }
    }
}

/// Listing filters. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntQuery {
    pub user_id: Option<Uuid>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub is_favorite: Option<bool>,
    pub title_contains: Option<String>,
}

impl HuntQuery {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn filters(&self) -> Vec<ColumnFilter<hunt::Column>> {
        let mut filters = Vec::new();
        if let Some(user_id) = self.user_id {
            filters.push(ColumnFilter::new(
                hunt::Column::UserId,
                FilterOp::Eq(Value::from(user_id)),
            ));
        }
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => filters.push(ColumnFilter::new(
                hunt::Column::Date,
                FilterOp::Between {
                    min: Value::from(from),
                    max: Value::from(to),
                },
            )),
            (Some(from), None) => filters.push(ColumnFilter::new(
                hunt::Column::Date,
                FilterOp::Compare {
                    op: CompareOp::Gte,
                    value: Value::from(from),
                },
            )),
            (None, Some(to)) => filters.push(ColumnFilter::new(
                hunt::Column::Date,
                FilterOp::Compare {
                    op: CompareOp::Lte,
                    value: Value::from(to),
                },
            )),
            (None, None) => {}
        }
        if let Some(is_favorite) = self.is_favorite {
            filters.push(ColumnFilter::new(
                hunt::Column::IsFavorite,
                FilterOp::Eq(Value::from(is_favorite)),
            ));
        }
        if let Some(needle) = self.title_contains.as_deref().filter(|s| !s.is_empty()) {
            filters.push(ColumnFilter::new(
                hunt::Column::Title,
                FilterOp::contains(needle),
            ));
        }
        filters
    }
}

#[derive(Clone)]
pub struct HuntDao {
    db: DatabaseConnection,
}

impl DaoBase for HuntDao {
    type Entity = Hunt;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl HuntDao {
    pub async fn create_hunt(&self, new_hunt: NewHunt) -> DaoResult<hunt::Model> {
        let hunt = self.create(new_hunt).await?;
        tracing::debug!(hunt_id = %hunt.id, user_id = %hunt.user_id, "hunt created");
        Ok(hunt)
    }

    pub async fn find_hunt(&self, id: &Uuid) -> DaoResult<hunt::Model> {
        self.find_by_id(*id).await
    }

    /// Newest hunts first, then most recently recorded.
    pub async fn list_hunts(
        &self,
        query: &HuntQuery,
        page: u64,
        page_size: u64,
    ) -> DaoResult<PaginatedResponse<hunt::Model>> {
        let filters = query.filters();
        self.find_with_filters(
            page,
            page_size,
            Some((hunt::Column::Date, Order::Desc)),
            &filters,
            |select| {
                select
                    .order_by_desc(hunt::Column::CreatedAt)
                    .order_by_desc(hunt::Column::Id)
            },
        )
        .await
    }

    pub async fn update_hunt(&self, id: &Uuid, changes: HuntChanges) -> DaoResult<hunt::Model> {
        self.update(*id, move |active| changes.apply(active)).await
    }

    pub async fn set_favorite(&self, id: &Uuid, is_favorite: bool) -> DaoResult<hunt::Model> {
        self.update(*id, move |active| {
            active.is_favorite = Set(is_favorite);
        })
        .await
    }

    pub async fn toggle_favorite(&self, id: &Uuid) -> DaoResult<hunt::Model> {
        self.update(*id, |active| {
            let current = match &active.is_favorite {
                ActiveValue::Set(value) | ActiveValue::Unchanged(value) => *value,
                ActiveValue::NotSet => false,
            };
            active.is_favorite = Set(!current);
        })
        .await
    }

    /// Photos, tracks and dog links go with the hunt through `ON DELETE CASCADE`.
    pub async fn delete_hunt(&self, id: &Uuid) -> DaoResult<Uuid> {
        let id = self.delete(*id).await?;
        tracing::debug!(hunt_id = %id, "hunt deleted");
        Ok(id)
    }

    pub async fn count_by_user(&self, user_id: &Uuid) -> DaoResult<u64> {
        let user_id = *user_id;
        self.count(move |select| select.filter(hunt::Column::UserId.eq(user_id)))
            .await
    }
}
