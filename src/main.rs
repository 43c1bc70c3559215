use hunt_log::{
    config::AppConfig,
    db::{
        connection,
        dao::{DaoBase, DaoContext},
    },
    logging::init_tracing,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("hunt_log failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging.rust_log)?;

    let db = connection::connect(&cfg.database).await?;
    let daos = DaoContext::new(&db);
    let users = daos.user().count(|select| select).await?;
    let hunts = daos.hunt().count(|select| select).await?;
    tracing::info!(users, hunts, "database ready");

    db.close().await?;
    Ok(())
}
