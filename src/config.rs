//! Process configuration
//!
//! All external inputs are read once from the environment at startup and
//! treated as immutable afterwards. The site password is held in memory for
//! the login flow but is never logged and is redacted from `Debug` output.

use std::fmt;

use tracing::warn;
use uuid::Uuid;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Default per-key request ceiling for the trailing hour
pub const DEFAULT_MAX_REQUESTS_PER_HOUR: usize = 10;

/// Immutable process configuration, loaded once at startup
#[derive(Clone)]
pub struct AppConfig {
    /// Identity used for the site login form
    pub site_email: String,

    /// Secret used for the site login form. Never logged.
    pub site_password: String,

    /// Static API key gating the scrape endpoint
    pub api_key: String,

    /// HTTP listening port
    pub port: u16,

    /// Sliding-window request ceiling per API key
    pub max_requests_per_hour: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `LINKEDIN_EMAIL` / `LINKEDIN_PASSWORD` — site credentials
    /// - `API_KEY` — caller key; a random UUID v4 is generated when unset
    /// - `PORT` — listening port (default 5000)
    /// - `MAX_REQUESTS_PER_HOUR` — quota ceiling (default 10)
    pub fn from_env() -> Self {
        let site_email = std::env::var("LINKEDIN_EMAIL").unwrap_or_default();
        let site_password = std::env::var("LINKEDIN_PASSWORD").unwrap_or_default();

        if site_email.is_empty() || site_password.is_empty() {
            warn!("LINKEDIN_EMAIL / LINKEDIN_PASSWORD not set; login attempts will fail");
        }

        let api_key =
            std::env::var("API_KEY").unwrap_or_else(|_| Uuid::new_v4().to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let max_requests_per_hour = std::env::var("MAX_REQUESTS_PER_HOUR")
            .ok()
            .and_then(|n| n.parse().ok())
            .unwrap_or(DEFAULT_MAX_REQUESTS_PER_HOUR);

        Self {
            site_email,
            site_password,
            api_key,
            port,
            max_requests_per_hour,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("site_email", &self.site_email)
            .field("site_password", &"<redacted>")
            .field("api_key", &self.api_key)
            .field("port", &self.port)
            .field("max_requests_per_hour", &self.max_requests_per_hour)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let config = AppConfig {
            site_email: "bot@example.com".into(),
            site_password: "hunter2".into(),
            api_key: "key".into(),
            port: DEFAULT_PORT,
            max_requests_per_hour: DEFAULT_MAX_REQUESTS_PER_HOUR,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
