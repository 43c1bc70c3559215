use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "dogs")]
pub struct Model {
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    pub name: String,
    pub breed: Option<String>,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub owner: HasOne<super::user::Entity>,
    #[sea_orm(has_many, via = "hunt_dog")]
    pub hunts: HasMany<super::hunt::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
