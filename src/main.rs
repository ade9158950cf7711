use anyhow::Context;
use dotenvy::dotenv;
use movies_api::config::settings::AppConfig;
use movies_api::infrastructure::db::pool::{connect_to_db, run_migrations};
use movies_api::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movies_api=debug,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::from_env();
    let db = connect_to_db(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db)
        .await
        .context("Failed to apply database migrations")?;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = movies_api::app::create_app(AppState::new(db)).await;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
