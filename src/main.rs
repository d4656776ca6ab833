use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tinylink::{config, db, AppState};

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent — env vars may already be set)
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinylink=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::AppConfig::from_env()?;
    tracing::info!("Starting tinylink on {}:{}", config.host, config.port);
    match &config.base_url {
        Some(base) => tracing::info!("Base URL: {}", base),
        None => tracing::info!("Base URL: taken from the request Host header"),
    }

    // Open SQLite connection pool (the file is created if missing)
    let pool = db::connect(&config).await?;

    // Creates url_mapping on first start
    db::migrate(&pool).await?;
    tracing::info!("Database migrations applied");

    let bind_addr = format!("{}:{}", config.host, config.port);

    let stored = db::count_mappings(&pool).await?;
    tracing::info!("{} mapping(s) on disk", stored);

    let app = tinylink::router(Arc::new(AppState::new(pool, config)));

    // ── Serve ──────────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
