use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

use super::StringList;

/// Metadata for an uploaded picture. The bytes live elsewhere; `url` and
/// `thumbnail_url` point at them. Append-only: there is no `updated_at`.
#[base_entity(immutable)]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(indexed)]
    pub hunt_id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub filename: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub original_filename: String,
    pub file_size: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub mime_type: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    #[sea_orm(column_type = "Text")]
    pub thumbnail_url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub taken_at: Option<DateTimeWithTimeZone>,
    pub location: Option<Json>,
    pub exif_data: Option<Json>,
    pub tags: StringList,
    #[sea_orm(belongs_to, from = "hunt_id", to = "id", on_delete = "Cascade")]
    pub hunt: HasOne<super::hunt::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.filename)
    }
}
