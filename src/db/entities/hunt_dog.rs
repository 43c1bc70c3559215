use sea_orm::entity::prelude::*;

/// Set membership between hunts and dogs. No columns beyond the composite key.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "hunt_dogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub hunt_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub dog_id: Uuid,
    #[sea_orm(belongs_to, from = "hunt_id", to = "id", on_delete = "Cascade")]
    pub hunt: HasOne<super::hunt::Entity>,
    #[sea_orm(belongs_to, from = "dog_id", to = "id", on_delete = "Cascade")]
    pub dog: HasOne<super::dog::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
