pub mod config;
pub mod error;
pub mod quota;
pub mod scrape;
pub mod server;
pub mod session;

pub use config::AppConfig;
pub use error::{ScrapeError, ScrapeResult};
pub use quota::QuotaTracker;
pub use scrape::{BrowserScraper, JobRecord, JobScraper, SearchQuery};
pub use server::{AppState, router};
pub use session::{ScrapeSession, SessionManager};
