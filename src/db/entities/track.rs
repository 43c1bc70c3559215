use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// GPS trail recorded during a hunt; `points` is an ordered JSON array of fixes.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "tracks")]
pub struct Model {
    #[sea_orm(indexed)]
    pub hunt_id: Uuid,
    pub points: Json,
    #[sea_orm(belongs_to, from = "hunt_id", to = "id", on_delete = "Cascade")]
    pub hunt: HasOne<super::hunt::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
