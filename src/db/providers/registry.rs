use std::{collections::HashMap, sync::Arc, time::Duration};

use anyhow::{Result, bail};
use async_trait::async_trait;
use sea_orm::{ConnectOptions, DatabaseConnection};

use crate::config::DatabaseConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbProviderId {
    Postgres,
    Sqlite,
}

impl DbProviderId {
    pub fn as_str(self) -> &'static str {
        match self {
            DbProviderId::Postgres => "postgres",
            DbProviderId::Sqlite => "sqlite",
        }
    }
}

#[async_trait]
pub trait DbProvider: Send + Sync {
    fn id(&self) -> DbProviderId;
    fn supports_url(&self, url: &str) -> bool;
    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection>;
    async fn post_connect(&self, _db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<()> {
        Ok(())
    }
}

/// Pool settings shared by every backend.
pub fn pool_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(false);
    options
}

pub struct DbProviders {
    providers: HashMap<DbProviderId, Arc<dyn DbProvider>>,
}

impl DbProviders {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn DbProvider>) -> Result<Self> {
        self.add(provider)?;
        Ok(self)
    }

    pub fn add(&mut self, provider: Arc<dyn DbProvider>) -> Result<()> {
        let id = provider.id();
        if self.providers.contains_key(&id) {
            bail!("database provider already registered: {}", id.as_str());
        }
        self.providers.insert(id, provider);
        Ok(())
    }

    pub fn provider_for_url(&self, url: &str) -> Result<Arc<dyn DbProvider>> {
        self.providers
            .values()
            .find(|provider| provider.supports_url(url))
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unsupported database url '{}'; expected scheme postgres://, postgresql://, or sqlite:",
                    redact_url(url)
                )
            })
    }
}

impl Default for DbProviders {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the scheme, drops credentials, host and path.
pub fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}
