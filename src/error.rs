//! Error taxonomy for the scrape pipeline
//!
//! Each variant corresponds to one whole-request failure class. Failures
//! scoped to a single extracted item are not represented here; the extractor
//! recovers from those locally (skip-and-continue).

use thiserror::Error;

/// A whole-request scrape failure
///
/// Messages never include credential values; the wrapped source error comes
/// from browser or DOM operations, not from the login form contents.
/// The `{0:#}` formatting preserves the full anyhow context chain.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Site login failed or timed out. The browser session has already been
    /// torn down by the time this is returned.
    #[error("authentication failed: {0:#}")]
    Auth(anyhow::Error),

    /// The results view never became ready within the navigation timeout.
    #[error("results view unavailable: {0:#}")]
    Target(anyhow::Error),

    /// The rendered results page could not be read back for extraction.
    #[error("extraction failed: {0:#}")]
    Extraction(anyhow::Error),
}

/// Convenience alias for pipeline results
pub type ScrapeResult<T> = Result<T, ScrapeError>;
