use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers;
use crate::config::DatabaseConfig;

/// Module path prefix under which every entity of this crate registers itself.
pub const ENTITY_REGISTRY_PREFIX: &str = "hunt_log::db::entities::*";

/// Connects through the provider matching the URL scheme, then syncs the schema.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_without_sync(cfg).await?;
    sync_schema(&db).await?;
    Ok(db)
}

pub async fn connect_without_sync(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;
    info!(provider = provider.id().as_str(), "connecting to database");

    let db = provider.connect(cfg).await?;
    provider
        .post_connect(&db, cfg)
        .await
        .with_context(|| format!("{} post-connect setup failed", provider.id().as_str()))?;
    Ok(db)
}

/// Creates missing tables, columns and foreign keys from the registered entities.
pub async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_REGISTRY_PREFIX)
        .sync(db)
        .await
        .context("schema sync failed")?;
    Ok(())
}
