//! Navigation to the job results view
//!
//! Builds the search URL, drives the authenticated page to it, and waits
//! for the results container landmark. Content semantics are left to the
//! extractor; this module only confirms the container exists.

use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::session::page::wait_for_selector;

use super::types::{JOBS_SEARCH_URL, RESULTS_LIST_SELECTOR, SearchQuery};

/// Build the results URL for a query
///
/// Query-pair encoding is whatever `url` provides; callers must not rely on
/// arbitrary characters surviving uninterpreted by the site. `f_E=1` keeps
/// the entry-level experience filter the service has always applied.
pub fn build_results_url(query: &SearchQuery) -> Result<Url> {
    let mut url = Url::parse(JOBS_SEARCH_URL).context("invalid job search base URL")?;
    url.query_pairs_mut()
        .append_pair("keywords", &query.term)
        .append_pair("location", &query.location)
        .append_pair("f_E", "1");
    Ok(url)
}

/// Navigate to the results view and wait for it to become ready
///
/// Bounded by `timeout`; a container that never appears is reported as an
/// error so the caller can distinguish "no results rendered" from "zero
/// results extracted".
pub(crate) async fn goto_results(
    page: &Page,
    query: &SearchQuery,
    timeout: Duration,
) -> Result<()> {
    let url = build_results_url(query)?;
    info!("navigating to job search: {url}");

    page.goto(url.as_str())
        .await
        .context("failed to navigate to job search")?;

    wait_for_selector(page, RESULTS_LIST_SELECTOR, timeout)
        .await
        .context("results container never rendered")?;

    Ok(())
}
