use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection};

use super::registry::{DbProvider, DbProviderId, pool_options, redact_url};
use crate::config::DatabaseConfig;

pub struct PostgresDbProvider;

#[async_trait]
impl DbProvider for PostgresDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Postgres
    }

    fn supports_url(&self, url: &str) -> bool {
        let normalized = url.trim().to_ascii_lowercase();
        normalized.starts_with("postgres://") || normalized.starts_with("postgresql://")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        Database::connect(pool_options(cfg))
            .await
            .with_context(|| format!("failed to connect to {}", redact_url(&cfg.url)))
    }
}
