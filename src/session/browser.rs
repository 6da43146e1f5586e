//! Browser engine lifecycle
//!
//! Launches isolated chromiumoxide browser instances with a masked automation
//! fingerprint, and guarantees the CDP event handler task and the per-session
//! profile directory are cleaned up with the engine.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// User agent presented to the site instead of the headless default
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Fixed viewport applied to every session
pub const VIEWPORT: (u32, u32) = (1920, 1080);

/// Wrapper for a Browser and its event handler task
///
/// The handler MUST be aborted once the browser is gone, or the task keeps
/// polling a dead connection indefinitely. `shutdown()` does the full
/// teardown; `Drop` is the fallback that at least stops the handler and
/// removes the profile directory.
pub struct BrowserHandle {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserHandle {
    pub(crate) fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the engine process and release everything it held
    ///
    /// Closes the browser, waits for the OS process to exit, aborts the
    /// handler task, and removes the temp profile directory. Teardown errors
    /// are logged rather than propagated; by this point the caller is already
    /// on an exit path and the process kill in `Browser::drop` is the
    /// backstop.
    pub(crate) async fn shutdown(&mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("failed to close browser cleanly: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("failed to wait for browser exit: {e}");
        }
        self.handler.abort();
        self.cleanup_user_data_dir();
    }

    /// Remove the per-session profile directory
    ///
    /// Must run after the engine process has exited so Chrome has released
    /// its file handles. Blocking removal, because this is also called from
    /// `Drop` where async is not available.
    fn cleanup_user_data_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            debug!("removing session profile dir: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "failed to remove profile dir {}: {e}. Manual cleanup may be required.",
                    path.display()
                );
            }
        }
    }
}

impl Drop for BrowserHandle {
    fn drop(&mut self) {
        self.handler.abort();
        // Browser::drop kills the Chrome process itself
        if self.user_data_dir.is_some() {
            warn!("BrowserHandle dropped without explicit shutdown - cleaning up in Drop");
            self.cleanup_user_data_dir();
        }
    }
}

/// Launch a new isolated browser instance with a masked fingerprint
///
/// Each launch gets its own temp profile directory, so concurrent sessions
/// never share cookies or storage. The CDP event handler is spawned with a
/// tracked `JoinHandle` owned by the returned `BrowserHandle`.
pub(crate) async fn launch_browser() -> Result<BrowserHandle> {
    let user_data_dir =
        std::env::temp_dir().join(format!("jobscout_chrome_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&user_data_dir)
        .context("failed to create session profile directory")?;

    let (width, height) = VIEWPORT;
    let browser_config = BrowserConfigBuilder::default()
        .request_timeout(Duration::from_secs(30))
        .window_size(width, height)
        .user_data_dir(user_data_dir.clone())
        .headless_mode(HeadlessMode::default())
        // Fingerprint masking: real user agent, no automation indicators
        .arg(format!("--user-agent={BROWSER_USER_AGENT}"))
        .arg("--disable-blink-features=AutomationControlled")
        .arg("--disable-infobars")
        .arg("--disable-notifications")
        .arg("--disable-dev-shm-usage")
        .arg("--disable-gpu")
        .arg("--disable-extensions")
        .arg("--disable-popup-blocking")
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--no-sandbox")
        .arg("--mute-audio")
        .arg("--hide-scrollbars")
        .arg("--password-store=basic")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .context("failed to launch browser")?;

    let handler_task = task::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                tracing::error!("browser handler error: {e:?}");
            }
        }
        debug!("browser event handler task completed");
    });

    info!("launched isolated browser instance");

    Ok(BrowserHandle {
        browser,
        handler: handler_task,
        user_data_dir: Some(user_data_dir),
    })
}
