//! Job record extraction from the rendered results page
//!
//! Snapshots the rendered DOM once and walks the job cards with `scraper`.
//! Failures are per-item: a card missing a sub-field yields sentinel values
//! for that field, and a card that cannot be processed at all is skipped so
//! one malformed node never costs more than one record.

use anyhow::{Context, Result, bail};
use chromiumoxide::page::Page;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::types::{
    COMPANY_SELECTOR, JOB_ITEM_SELECTOR, JobRecord, LOCATION_SELECTOR, MAX_JOBS,
    MISSING_FIELD_TEXT, MISSING_LINK_TEXT, RESULTS_LIST_SELECTOR, TITLE_SELECTOR,
};

fn results_list_selector() -> Selector {
    Selector::parse(RESULTS_LIST_SELECTOR)
        .expect("BUG: hardcoded CSS selector for results list is invalid")
}

fn job_item_selector() -> Selector {
    Selector::parse(JOB_ITEM_SELECTOR)
        .expect("BUG: hardcoded CSS selector for job items is invalid")
}

fn title_selector() -> Selector {
    Selector::parse(TITLE_SELECTOR)
        .expect("BUG: hardcoded CSS selector for job title is invalid")
}

fn company_selector() -> Selector {
    Selector::parse(COMPANY_SELECTOR)
        .expect("BUG: hardcoded CSS selector for company is invalid")
}

fn location_selector() -> Selector {
    Selector::parse(LOCATION_SELECTOR)
        .expect("BUG: hardcoded CSS selector for location is invalid")
}

/// Extract up to `MAX_JOBS` records from the session's results page
///
/// Only fails as a whole when the rendered DOM cannot be read back from the
/// browser; everything past that point degrades per item.
pub async fn extract_jobs(page: &Page) -> Result<Vec<JobRecord>> {
    let html = page
        .content()
        .await
        .context("failed to snapshot rendered results page")?;
    Ok(extract_jobs_from_html(&html))
}

/// Walk the job cards in document order and accumulate records
///
/// A skipped card does not consume one of the `MAX_JOBS` slots; iteration
/// continues until the page is full or the cards run out. An empty result is
/// a valid outcome (the container rendered but held nothing usable) and is
/// distinct from the navigator's container-never-appeared failure.
pub fn extract_jobs_from_html(html: &str) -> Vec<JobRecord> {
    let document = Html::parse_document(html);

    let Some(container) = document.select(&results_list_selector()).next() else {
        debug!("results container absent from DOM snapshot");
        return Vec::new();
    };

    let mut jobs = Vec::new();
    for (index, item) in container.select(&job_item_selector()).enumerate() {
        if jobs.len() >= MAX_JOBS {
            break;
        }
        match extract_record(&item) {
            Ok(record) => jobs.push(record),
            Err(e) => {
                warn!("skipping job card {}: {e:#}", index + 1);
            }
        }
    }

    debug!("extracted {} job records", jobs.len());
    jobs
}

/// Convert one job card into a record
///
/// Missing sub-fields degrade to sentinels field by field. A card with no
/// element content at all (an empty or placeholder node) is an error; the
/// caller skips it and moves on to the next card.
fn extract_record(item: &ElementRef) -> Result<JobRecord> {
    if !item.children().any(|child| ElementRef::wrap(child).is_some()) {
        bail!("job card has no element content");
    }

    let title_element = item.select(&title_selector()).next();

    let title = title_element
        .map(element_text)
        .unwrap_or_else(|| MISSING_FIELD_TEXT.to_string());

    let link = title_element
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
        .unwrap_or_else(|| MISSING_LINK_TEXT.to_string());

    let company = item
        .select(&company_selector())
        .next()
        .map(element_text)
        .unwrap_or_else(|| MISSING_FIELD_TEXT.to_string());

    let location = item
        .select(&location_selector())
        .next()
        .map(element_text)
        .unwrap_or_else(|| MISSING_FIELD_TEXT.to_string());

    Ok(JobRecord {
        title,
        company,
        location,
        link,
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
