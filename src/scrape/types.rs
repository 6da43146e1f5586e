//! Data structures and constants for the job scrape pipeline

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Login page for the content site
pub const LOGIN_URL: &str = "https://www.linkedin.com/login";

/// Base URL for the job search results view
pub const JOBS_SEARCH_URL: &str = "https://www.linkedin.com/jobs/search";

/// CSS selector for the login identity field
pub const USERNAME_SELECTOR: &str = "#username";

/// CSS selector for the login secret field
pub const PASSWORD_SELECTOR: &str = "#password";

/// CSS selector for the login form submit button
pub const LOGIN_SUBMIT_SELECTOR: &str = "button[type=submit]";

/// Landmark element that signals a completed login
/// The global navigation bar only renders for authenticated users
pub const POST_LOGIN_SELECTOR: &str = "nav.global-nav";

/// Landmark element for the rendered job results container
pub const RESULTS_LIST_SELECTOR: &str = ".jobs-search__results-list";

/// CSS selector for one job card inside the results container
pub const JOB_ITEM_SELECTOR: &str = "li";

/// CSS selector for the job title link (also carries the href)
pub const TITLE_SELECTOR: &str = ".base-card__full-link";

/// CSS selector for the hiring company name
pub const COMPANY_SELECTOR: &str = ".base-search-card__subtitle";

/// CSS selector for the job location label
pub const LOCATION_SELECTOR: &str = ".job-search-card__location";

/// Maximum time to wait for the login form fields to render (seconds)
pub const LOGIN_FORM_WAIT_TIMEOUT: u64 = 10;

/// Maximum time to wait for the post-login landmark (seconds)
pub const LOGIN_WAIT_TIMEOUT: u64 = 15;

/// Maximum time to wait for the results container to render (seconds)
pub const RESULTS_WAIT_TIMEOUT: u64 = 10;

/// Maximum number of job records to extract per request (no pagination)
pub const MAX_JOBS: usize = 5;

/// Sentinel for a text field whose source node is absent
pub const MISSING_FIELD_TEXT: &str = "N/A";

/// Sentinel for a missing job link
pub const MISSING_LINK_TEXT: &str = "#";

// =============================================================================
// Data Structures
// =============================================================================

/// Immutable search input: what to look for and where
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Job title or keyword term
    pub term: String,

    /// Location filter (city, region, or "Remote")
    pub location: String,
}

/// One structured job listing extracted from the rendered results page
///
/// Every field falls back to a sentinel (`"N/A"` / `"#"`) when the
/// corresponding source node is missing, so a partially rendered card
/// still yields a record instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job title
    pub title: String,

    /// Hiring company
    pub company: String,

    /// Job location
    pub location: String,

    /// Link to the full posting
    pub link: String,
}
