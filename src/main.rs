//! Movie catalog backend - entry point
//!
//! Loads configuration, connects the store, bootstraps the schema and serves
//! the REST API.

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_catalog::config::Config;
use movie_catalog::db::{Database, seed};
use movie_catalog::{AppState, build_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_catalog=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting movie catalog");

    let config = Config::from_env()?;
    tracing::info!(page_size = config.page_size, "Configuration loaded");

    let db = Database::connect_with_retry(
        &config.database_url,
        config.database_max_connections,
        config.database_acquire_timeout,
        Duration::from_secs(2),
        5,
    )
    .await?;
    tracing::info!("Database connected");

    db.ensure_schema().await?;

    if config.seed_demo_data {
        if db.movies().count().await? == 0 {
            seed::seed_demo_catalog(db.pool()).await?;
        } else {
            tracing::info!("Catalog already populated, skipping demo seed");
        }
    }

    let state = AppState::new(&config, db);
    let app = build_app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
