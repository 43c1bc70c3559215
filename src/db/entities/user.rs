use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// Account that owns hunts and dogs. Only the columns the hunt log references.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(unique)]
    pub email: String,
    pub display_name: Option<String>,
    #[sea_orm(has_many)]
    pub hunts: HasMany<super::hunt::Entity>,
    #[sea_orm(has_many)]
    pub dogs: HasMany<super::dog::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
