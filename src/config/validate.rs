use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.logging.rust_log.trim().is_empty() {
        errors.push("logging.rust_log must not be empty".to_string());
    }

    let database = &cfg.database;
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if database.connect_timeout_secs == 0 {
        errors.push("database.connect_timeout_secs must be > 0".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::{AppConfig, DatabaseConfig};

    #[test]
    fn accepts_defaults() {
        validate(&AppConfig::default()).expect("default config should be valid");
    }

    #[test]
    fn accepts_in_memory_sqlite() {
        let cfg = AppConfig {
            database: DatabaseConfig::in_memory_sqlite(),
            ..AppConfig::default()
        };
        validate(&cfg).expect("in-memory config should be valid");
    }

    #[test]
    fn reports_every_problem_at_once() {
        let cfg = AppConfig {
            database: DatabaseConfig {
                url: "   ".to_string(),
                max_connections: 0,
                min_idle: 3,
                connect_timeout_secs: 0,
            },
            ..AppConfig::default()
        };

        let message = validate(&cfg)
            .expect_err("config should be rejected")
            .to_string();

        assert!(message.contains("database.url must not be empty"));
        assert!(message.contains("database.max_connections must be > 0"));
        assert!(message.contains("database.min_idle (3) must be <= database.max_connections (0)"));
        assert!(message.contains("database.connect_timeout_secs must be > 0"));
    }
}
