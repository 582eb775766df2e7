use anyhow::Context;
use clap::Parser;
use lema::args::Cli;
use lema::logging::init_tracing;
use lema::router::init_router;
use lema::server::serve;
use lema::state::AppState;
use lema_config::{AppConfig, Environment};
use lema_db::{init_db_pool, run_migrations};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.environment()? != Environment::Test {
        dotenvy::dotenv().ok();
    }

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    cli.apply(&mut config).context("Invalid command-line flags")?;

    init_tracing(&config.log_level, config.environment)
        .context("Failed to install tracing subscriber")?;
    info!(
        environment = %config.environment,
        port = config.server.port,
        "Starting Lema API"
    );

    let pool = init_db_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let port = config.server.port;
    let app = init_router(AppState::new(pool.clone(), config));

    serve(app, port).await.context("Server error")?;
    pool.close().await;

    Ok(())
}
