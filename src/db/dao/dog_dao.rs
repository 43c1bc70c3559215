use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{dog, prelude::Dog};

#[derive(Clone)]
pub struct DogDao {
    db: DatabaseConnection,
}

impl DaoBase for DogDao {
    type Entity = Dog;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DogDao {
    pub async fn create_dog(
        &self,
        user_id: &Uuid,
        name: &str,
        breed: Option<&str>,
    ) -> DaoResult<dog::Model> {
        let model = dog::ActiveModel {
            user_id: Set(*user_id),
            name: Set(name.to_string()),
            breed: Set(breed.map(str::to_string)),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_dog(&self, id: &Uuid) -> DaoResult<dog::Model> {
        self.find_by_id(*id).await
    }

    pub async fn list_active_for_user(&self, user_id: &Uuid) -> DaoResult<Vec<dog::Model>> {
        let user_id = *user_id;
        self.find_iter(None, Some((dog::Column::Name, Order::Asc)), move |query| {
            query
                .filter(dog::Column::UserId.eq(user_id))
                .filter(dog::Column::IsActive.eq(true))
        })
        .collect_all()
        .await
    }

    /// Retires the dog but keeps its hunt history.
    pub async fn deactivate(&self, id: &Uuid) -> DaoResult<dog::Model> {
        self.update(*id, |active| {
            active.is_active = Set(false);
        })
        .await
    }

    /// Hard delete; the dog's hunt links go with it, the hunts stay.
    pub async fn delete_dog(&self, id: &Uuid) -> DaoResult<Uuid> {
        self.delete(*id).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::DogDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::dog;

    #[tokio::test]
    async fn deactivate_propagates_not_found() {
        let missing_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<dog::Model>::new()])
            .into_connection();
        let dao = DogDao::new(&db);

        let err = dao
            .deactivate(&missing_id)
            .await
            .expect_err("update should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { id, .. } if id == missing_id
        ));
    }
}
