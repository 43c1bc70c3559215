use sea_orm::{DbErr, SqlErr};
use uuid::Uuid;

/// Storage-engine failures pass through untouched in [`DaoLayerError::Db`]; the other
/// variants come from the write path itself.
#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("Invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    /// The engine's own classification of a constraint failure, if any.
    pub fn sql_err(&self) -> Option<SqlErr> {
        match self {
            DaoLayerError::Db(err) => err.sql_err(),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DaoLayerError::NotFound { .. })
    }
}

impl From<DbErr> for DaoLayerError {
    fn from(err: DbErr) -> Self {
        DaoLayerError::Db(err)
    }
}
