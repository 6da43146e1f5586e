//! Helpers for chromiumoxide Page interactions
//!
//! Condition-waits with explicit timeouts instead of fixed sleeps: rendered
//! content is polled until the landmark selector appears or the deadline
//! passes.

use anyhow::{Result, anyhow};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Poll interval between selector lookups
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Wait until `selector` matches an element in the rendered DOM
///
/// Bounded blocking point: polls every 200ms and gives up after `timeout`.
/// The page keeps rendering asynchronously after navigation completes, so
/// a plain `wait_for_navigation` is not enough to know a landmark exists.
pub(crate) async fn wait_for_selector(
    page: &Page,
    selector: &str,
    timeout: Duration,
) -> Result<Element> {
    let start = Instant::now();
    loop {
        match page.find_element(selector).await {
            Ok(element) => {
                debug!("'{selector}' appeared after {:?}", start.elapsed());
                return Ok(element);
            }
            Err(_) if start.elapsed() >= timeout => {
                let url = page_url_with_fallback(page).await;
                return Err(anyhow!(
                    "timeout after {timeout:?} waiting for '{selector}' (page: {url})"
                ));
            }
            Err(_) => {
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }
    }
}

/// Get the page URL with a diagnostic fallback
///
/// Returns `"about:blank"` when the page has no URL yet or the browser
/// connection errors, which is more useful in logs than an empty string.
pub(crate) async fn page_url_with_fallback(page: &Page) -> String {
    match page.url().await {
        Ok(Some(url)) => url,
        Ok(None) => {
            trace!("page URL is None (page not yet navigated)");
            "about:blank".to_string()
        }
        Err(e) => {
            trace!("failed to get page URL: {e}");
            "about:blank".to_string()
        }
    }
}
