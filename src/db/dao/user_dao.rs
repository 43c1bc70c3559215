use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::User, user};

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn create_user(
        &self,
        email: &str,
        display_name: Option<&str>,
    ) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            display_name: Set(display_name.map(str::to_string)),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let email = email.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(user::Column::Email.eq(email))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    /// Removes the user together with their dogs, hunts and everything the hunts own.
    pub async fn delete_user(&self, id: &Uuid) -> DaoResult<Uuid> {
        self.delete(*id).await
    }
}
