pub const DEFAULT_RUST_LOG: &str = "info,hunt_log=debug,sea_orm=warn,sqlx=warn";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://hunt_log.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 2;
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 5;
