use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

use super::StringList;

/// A single hunting trip.
///
/// `location`, `weather`, `game_seen` and `game_harvested` are free-form JSON documents;
/// the layer stores them as given. `end_time` is not checked against `start_time`.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "hunts")]
pub struct Model {
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
    #[sea_orm(indexed)]
    pub date: Date,
    pub start_time: Time,
    pub end_time: Option<Time>,
    pub location: Json,
    pub weather: Option<Json>,
    #[sea_orm(default_value = "[]")]
    pub game_type: StringList,
    #[sea_orm(default_value = "[]")]
    pub game_seen: Json,
    #[sea_orm(default_value = "[]")]
    pub game_harvested: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    #[sea_orm(default_value = "[]")]
    pub tags: StringList,
    #[sea_orm(default_value = false)]
    pub is_favorite: bool,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(has_many)]
    pub photos: HasMany<super::photo::Entity>,
    #[sea_orm(has_many)]
    pub tracks: HasMany<super::track::Entity>,
    #[sea_orm(has_many, via = "hunt_dog")]
    pub dogs: HasMany<super::dog::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.title, self.date)
    }
}
