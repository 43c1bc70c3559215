use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

use super::registry::{DbProvider, DbProviderId, pool_options, redact_url};
use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

pub struct SqliteDbProvider;

#[async_trait]
impl DbProvider for SqliteDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Sqlite
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("sqlite:")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        Database::connect(pool_options(cfg))
            .await
            .with_context(|| format!("failed to open {}", redact_url(&cfg.url)))
    }

    // Cascading deletes are inert unless foreign key enforcement is switched on.
    async fn post_connect(&self, db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<()> {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
        Ok(())
    }
}
