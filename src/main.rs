// Job scrape API server
//
// Serves the scrape endpoints over HTTP. Credentials, API key, port, and
// quota ceiling come from the environment; see config::AppConfig::from_env.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jobscout::{AppConfig, AppState, BrowserScraper, QuotaTracker};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobscout=info,tower_http=info")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env());
    info!("API key: {}", config.api_key);

    let state = Arc::new(AppState {
        config: config.clone(),
        quota: QuotaTracker::new(config.max_requests_per_hour),
        scraper: Arc::new(BrowserScraper::new(config.clone())),
    });

    let app = jobscout::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
