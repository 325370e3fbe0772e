use anyhow::{Context, Result};
use locale_router::{config::AppConfig, server};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_router=info".parse()?),
        )
        .init();

    info!("Starting locale router preview server");

    let config = AppConfig::from_env()?;
    info!(
        "Locales: {:?} (default '{}', prefixed default: {})",
        config.routing.locales(),
        config.routing.default_locale(),
        config.routing.prefix_default_locale()
    );

    let state = server::AppState::from_config(&config)?;
    if !state.report_validation() {
        warn!("Continuing with validation errors; affected lookups will fall back");
    }
    info!(
        "Loaded {} path overrides and {} blog entries",
        state.overrides.len(),
        state.articles.len()
    );

    let app = server::router(Arc::new(state));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
