//! The scrape pipeline
//!
//! Composes session acquisition, navigation, and extraction for one request.
//! The session is released on every exit path: acquisition failures tear
//! down internally, and everything after a successful acquire funnels
//! through a single `close()` before the result is returned.

pub mod extract;
pub mod navigate;
pub mod types;

pub use types::{JobRecord, SearchQuery};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{ScrapeError, ScrapeResult};
use crate::session::SessionManager;

use types::RESULTS_WAIT_TIMEOUT;

/// One full scrape attempt for a query
///
/// The serving layer depends on this seam rather than on the browser
/// directly, so request handling can be exercised without launching Chrome.
#[async_trait]
pub trait JobScraper: Send + Sync {
    /// Run the pipeline once: authenticate, navigate, extract
    ///
    /// Single attempt per request; no retry across whole scrapes.
    async fn scrape(&self, query: &SearchQuery) -> ScrapeResult<Vec<JobRecord>>;
}

/// Production scraper backed by a fresh headless browser session per request
pub struct BrowserScraper {
    sessions: SessionManager,
    results_timeout: Duration,
}

impl BrowserScraper {
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            sessions: SessionManager::new(config),
            results_timeout: Duration::from_secs(RESULTS_WAIT_TIMEOUT),
        }
    }
}

#[async_trait]
impl JobScraper for BrowserScraper {
    async fn scrape(&self, query: &SearchQuery) -> ScrapeResult<Vec<JobRecord>> {
        // acquire() tears its own partial state down on failure
        let session = self.sessions.acquire().await?;

        // From here the session must be closed before any return
        let result = match navigate::goto_results(session.page(), query, self.results_timeout)
            .await
        {
            Err(e) => {
                warn!("results view unavailable for '{}': {e:#}", query.term);
                Err(ScrapeError::Target(e))
            }
            Ok(()) => match extract::extract_jobs(session.page()).await {
                Ok(records) => {
                    info!(
                        "scrape for '{}' in '{}' yielded {} records",
                        query.term,
                        query.location,
                        records.len()
                    );
                    Ok(records)
                }
                Err(e) => {
                    warn!("extraction failed for '{}': {e:#}", query.term);
                    Err(ScrapeError::Extraction(e))
                }
            },
        };

        session.close().await;
        result
    }
}
