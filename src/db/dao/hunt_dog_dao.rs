use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::{DaoLayerError, DaoResult};
use crate::db::entities::prelude::{Dog, Hunt, HuntDog};
use crate::db::entities::{dog, hunt, hunt_dog};

/// Membership between hunts and dogs.
///
/// The join table has a composite key, so this does not go through `DaoBase`. Adding a
/// pair twice fails with the engine's unique violation; removing either side cascades.
#[derive(Clone)]
pub struct HuntDogDao {
    db: DatabaseConnection,
}

impl HuntDogDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn attach(&self, hunt_id: &Uuid, dog_id: &Uuid) -> DaoResult<hunt_dog::Model> {
        hunt_dog::ActiveModel {
            hunt_id: Set(*hunt_id),
            dog_id: Set(*dog_id),
        }
        .insert(&self.db)
        .await
        .map_err(DaoLayerError::Db)
    }

    /// `false` when the pair was not linked.
    pub async fn detach(&self, hunt_id: &Uuid, dog_id: &Uuid) -> DaoResult<bool> {
        let result = HuntDog::delete_many()
            .filter(hunt_dog::Column::HuntId.eq(*hunt_id))
            .filter(hunt_dog::Column::DogId.eq(*dog_id))
            .exec(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(result.rows_affected > 0)
    }

    pub async fn is_attached(&self, hunt_id: &Uuid, dog_id: &Uuid) -> DaoResult<bool> {
        let link = HuntDog::find_by_id((*hunt_id, *dog_id))
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(link.is_some())
    }

    pub async fn dog_ids_for_hunt(&self, hunt_id: &Uuid) -> DaoResult<Vec<Uuid>> {
        let links = HuntDog::find()
            .filter(hunt_dog::Column::HuntId.eq(*hunt_id))
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(links.into_iter().map(|link| link.dog_id).collect())
    }

    pub async fn hunt_ids_for_dog(&self, dog_id: &Uuid) -> DaoResult<Vec<Uuid>> {
        let links = HuntDog::find()
            .filter(hunt_dog::Column::DogId.eq(*dog_id))
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(links.into_iter().map(|link| link.hunt_id).collect())
    }

    /// Dogs on the hunt, by name.
    pub async fn dogs_for_hunt(&self, hunt_id: &Uuid) -> DaoResult<Vec<dog::Model>> {
        let ids = self.dog_ids_for_hunt(hunt_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Dog::find()
            .filter(dog::Column::Id.is_in(ids))
            .order_by_asc(dog::Column::Name)
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    /// Hunts the dog took part in, newest first.
    pub async fn hunts_for_dog(&self, dog_id: &Uuid) -> DaoResult<Vec<hunt::Model>> {
        let ids = self.hunt_ids_for_dog(dog_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Hunt::find()
            .filter(hunt::Column::Id.is_in(ids))
            .order_by_desc(hunt::Column::Date)
            .order_by_desc(hunt::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    /// Makes `dog_ids` the hunt's complete dog set in one transaction. Repeated ids
    /// collapse into one link; returns the resulting set in input order.
    pub async fn replace_dogs(&self, hunt_id: &Uuid, dog_ids: &[Uuid]) -> DaoResult<Vec<Uuid>> {
        let mut unique = Vec::with_capacity(dog_ids.len());
        for dog_id in dog_ids {
            if !unique.contains(dog_id) {
                unique.push(*dog_id);
            }
        }

        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;
        HuntDog::delete_many()
            .filter(hunt_dog::Column::HuntId.eq(*hunt_id))
            .exec(&txn)
            .await
            .map_err(DaoLayerError::Db)?;
        for dog_id in &unique {
            hunt_dog::ActiveModel {
                hunt_id: Set(*hunt_id),
                dog_id: Set(*dog_id),
            }
            .insert(&txn)
            .await
            .map_err(DaoLayerError::Db)?;
        }
        txn.commit().await.map_err(DaoLayerError::Db)?;

        tracing::debug!(hunt_id = %hunt_id, dogs = unique.len(), "hunt dogs replaced");
        Ok(unique)
    }
}
