//! Live end-to-end pipeline test
//!
//! Runs the real browser pipeline against the site. Needs a Chrome
//! installation plus LINKEDIN_EMAIL / LINKEDIN_PASSWORD in the environment,
//! so it stays ignored in normal runs.

use std::sync::Arc;

use jobscout::scrape::types::MAX_JOBS;
use jobscout::{AppConfig, BrowserScraper, JobScraper, SearchQuery};

#[tokio::test]
#[ignore] // Requires browser installation and real site credentials
async fn live_scrape_end_to_end() {
    let config = Arc::new(AppConfig::from_env());
    let scraper = BrowserScraper::new(config);

    let query = SearchQuery {
        term: "engineer".into(),
        location: "Remote".into(),
    };

    let records = scraper.scrape(&query).await.unwrap();
    assert!(records.len() <= MAX_JOBS);
    for record in &records {
        assert!(!record.title.is_empty());
        assert!(!record.link.is_empty());
    }
}
