//! Authenticated browser session lifecycle
//!
//! One `ScrapeSession` per scrape request: an exclusively-owned browser
//! engine instance, one browsing context (temp profile), and one page,
//! authenticated against the content site. Sessions are never shared or
//! pooled; every acquire launches a fresh engine and every exit path must
//! end in `close()`.

mod browser;
pub(crate) mod page;

pub use browser::{BROWSER_USER_AGENT, VIEWPORT};

use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::ScrapeError;
use crate::scrape::types::{
    LOGIN_FORM_WAIT_TIMEOUT, LOGIN_SUBMIT_SELECTOR, LOGIN_URL, LOGIN_WAIT_TIMEOUT,
    PASSWORD_SELECTOR, POST_LOGIN_SELECTOR, USERNAME_SELECTOR,
};

use browser::{BrowserHandle, launch_browser};
use page::wait_for_selector;

/// A live, exclusively-owned authenticated browser session
///
/// Holds the engine handle and the single page used for the whole request.
/// `close()` consumes the session, so release happens at most once by
/// construction; `BrowserHandle`'s `Drop` is the fallback if a session is
/// leaked without an explicit close.
pub struct ScrapeSession {
    handle: BrowserHandle,
    page: Page,
}

impl ScrapeSession {
    /// The session's page, post-login
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Tear the session down: page, then engine process, then handler task
    ///
    /// Consumes the session. Safe on any pipeline exit path; teardown errors
    /// are logged, not propagated, since the caller is already returning.
    pub async fn close(mut self) {
        if let Err(e) = self.page.clone().close().await {
            warn!("failed to close page cleanly: {e}");
        }
        self.handle.shutdown().await;
        info!("scrape session released");
    }
}

/// Launches and authenticates browser sessions
///
/// Credentials are read once from configuration at process start; the
/// manager never logs the secret value.
pub struct SessionManager {
    config: Arc<AppConfig>,
}

impl SessionManager {
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Launch an isolated browser and run the login flow
    ///
    /// Any failure mid-construction tears down whatever was already created
    /// before the error is returned, so an `Err` never leaks an engine
    /// process.
    pub async fn acquire(&self) -> Result<ScrapeSession, ScrapeError> {
        let mut handle = launch_browser().await.map_err(ScrapeError::Auth)?;

        let page = match handle.browser().new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                handle.shutdown().await;
                return Err(ScrapeError::Auth(
                    anyhow::Error::new(e).context("failed to open page"),
                ));
            }
        };

        let session = ScrapeSession { handle, page };
        if let Err(e) = self.login(session.page()).await {
            warn!("login flow failed: {e:#}");
            session.close().await;
            return Err(ScrapeError::Auth(e));
        }

        info!("authenticated session ready");
        Ok(session)
    }

    /// Run the site login flow on a fresh page
    ///
    /// Fills the identity and secret fields, submits, and waits for the
    /// post-login landmark to confirm the authenticated state was reached.
    async fn login(&self, page: &Page) -> Result<()> {
        page.goto(LOGIN_URL)
            .await
            .context("failed to navigate to login page")?;
        page.wait_for_navigation()
            .await
            .context("login page never finished loading")?;

        let username = wait_for_selector(
            page,
            USERNAME_SELECTOR,
            Duration::from_secs(LOGIN_FORM_WAIT_TIMEOUT),
        )
        .await
        .context("login form did not render")?;
        username.click().await.context("failed to focus identity field")?;
        username
            .type_str(&self.config.site_email)
            .await
            .context("failed to fill identity field")?;

        let password = page
            .find_element(PASSWORD_SELECTOR)
            .await
            .context("secret field not found")?;
        password.click().await.context("failed to focus secret field")?;
        password
            .type_str(&self.config.site_password)
            .await
            .context("failed to fill secret field")?;

        page.find_element(LOGIN_SUBMIT_SELECTOR)
            .await
            .context("login submit button not found")?
            .click()
            .await
            .context("failed to submit login form")?;

        wait_for_selector(
            page,
            POST_LOGIN_SELECTOR,
            Duration::from_secs(LOGIN_WAIT_TIMEOUT),
        )
        .await
        .context("post-login landmark never appeared")?;

        Ok(())
    }
}
