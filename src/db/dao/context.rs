use sea_orm::DatabaseConnection;

use super::{DaoBase, DogDao, HuntDao, HuntDogDao, PhotoDao, TrackDao, UserDao};

/// Hands out DAOs that share one connection pool.
#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn dog(&self) -> DogDao {
        DaoBase::new(&self.db)
    }

    pub fn hunt(&self) -> HuntDao {
        DaoBase::new(&self.db)
    }

    pub fn photo(&self) -> PhotoDao {
        DaoBase::new(&self.db)
    }

    pub fn track(&self) -> TrackDao {
        DaoBase::new(&self.db)
    }

    pub fn hunt_dog(&self) -> HuntDogDao {
        HuntDogDao::new(&self.db)
    }
}
