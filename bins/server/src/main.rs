//! Jamii API Server
//!
//! Main entry point for the event finance service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jamii_api::{AppState, create_router};
use jamii_shared::AppConfig;
use jamii_store::{FinanceRepository, FinanceStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jamii=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load and validate configuration
    let config = AppConfig::load()?;
    info!(
        currency = %config.finance.default_currency,
        campaign_days = config.finance.campaign_days,
        assumed_attendees = config.finance.assumed_attendees,
        "Finance policy loaded"
    );

    // Create application state
    let store = Arc::new(FinanceStore::new());
    let state = AppState::new(FinanceRepository::new(store, config.finance));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
