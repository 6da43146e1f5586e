//! HTTP surface
//!
//! Thin axum routing layer over the scrape pipeline. Validation and key
//! checks cost nothing; the quota check runs only for authenticated callers
//! so failed-auth probes never consume quota; a browser session is only
//! launched once all three gates pass.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::config::AppConfig;
use crate::error::ScrapeError;
use crate::quota::QuotaTracker;
use crate::scrape::{JobScraper, SearchQuery};

/// Shared per-process state, injected into every handler
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub quota: QuotaTracker,
    pub scraper: Arc<dyn JobScraper>,
}

/// Build the service router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/get-api-key", get(get_api_key))
        .route("/scrape", get(scrape))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Service description; no side effects
async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "status": "API is running",
        "endpoints": [
            {
                "path": "/get-api-key",
                "method": "GET",
                "description": "Get the API key"
            },
            {
                "path": "/scrape",
                "method": "GET",
                "params": ["job_title", "location", "api_key"],
                "description": "Scrape job listings"
            }
        ]
    }))
}

/// Deployment/debug aid: return the process-configured key
async fn get_api_key(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({ "api_key": state.config.api_key }))
}

#[derive(Debug, Deserialize)]
struct ScrapeParams {
    job_title: Option<String>,
    location: Option<String>,
    api_key: Option<String>,
}

/// The scrape endpoint
///
/// Gates in order: required params (400), API key (403), quota (429). Only
/// then does a pipeline run, on its own task so a panic surfaces as a 500
/// instead of killing the connection.
async fn scrape(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScrapeParams>,
) -> Response {
    let (job_title, location) = match (params.job_title, params.location) {
        (Some(t), Some(l)) if !t.is_empty() && !l.is_empty() => (t, l),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing job_title or location" })),
            )
                .into_response();
        }
    };

    let api_key = match params.api_key {
        Some(key) if key == state.config.api_key => key,
        _ => {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": "Invalid or missing API key" })),
            )
                .into_response();
        }
    };

    if !state.quota.admit(&api_key).await {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Rate limit exceeded",
                "message": format!(
                    "Maximum {} requests per hour allowed",
                    state.config.max_requests_per_hour
                )
            })),
        )
            .into_response();
    }

    let query = SearchQuery {
        term: job_title,
        location,
    };
    let scraper = state.scraper.clone();
    let task = tokio::spawn(async move { scraper.scrape(&query).await });

    match task.await {
        Ok(Ok(records)) => (StatusCode::OK, Json(records)).into_response(),
        Ok(Err(e)) => {
            warn!("scrape pipeline failed: {e}");
            // Pipeline failures are upstream failures, hence 502 rather than
            // the 200-with-error-body this service historically returned
            let body = match e {
                ScrapeError::Auth(_) => json!({ "error": "Login failed, cannot scrape jobs" }),
                ScrapeError::Target(_) | ScrapeError::Extraction(_) => {
                    json!({ "error": "Scraping failed due to unexpected error" })
                }
            };
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
        Err(e) => {
            warn!("scrape task died: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Server error: {e}") })),
            )
                .into_response()
        }
    }
}
