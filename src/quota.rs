//! Sliding-window request quota per API key
//!
//! Tracks the timestamps of admitted requests for each key over a trailing
//! window (one hour by default) and rejects requests once a key reaches the
//! configured ceiling. The whole map lives behind one async mutex, so the
//! check-then-append sequence for a key is atomic with respect to concurrent
//! callers and no double admission can slip through.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

/// Default sliding window length
const DEFAULT_WINDOW: Duration = Duration::from_secs(3600);

/// Per-key sliding-window request counter
///
/// Owned state, injected where needed; there is no ambient global. Rejected
/// attempts are not recorded, so probing a exhausted key does not extend its
/// window.
pub struct QuotaTracker {
    windows: Mutex<HashMap<String, Vec<Instant>>>,
    limit: usize,
    window: Duration,
}

impl QuotaTracker {
    /// Create a tracker with the given per-key ceiling over a one-hour window
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self::with_window(limit, DEFAULT_WINDOW)
    }

    /// Create a tracker with an explicit window length
    ///
    /// Tests use shortened windows to exercise expiry without waiting an hour.
    #[must_use]
    pub fn with_window(limit: usize, window: Duration) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            limit,
            window,
        }
    }

    /// Admit or reject a request for `key`
    ///
    /// Prunes timestamps older than the window for every tracked key, then
    /// checks the key's remaining count. On admission the current time is
    /// recorded; on rejection nothing is. A key never seen before starts
    /// with zero prior requests.
    pub async fn admit(&self, key: &str) -> bool {
        self.admit_at(key, Instant::now()).await
    }

    /// Admission check against an explicit `now`, for deterministic tests
    pub async fn admit_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().await;

        // Global sweep: drop entries that aged out of the window, then drop
        // keys left empty so the map stays bounded by active callers.
        if let Some(cutoff) = now.checked_sub(self.window) {
            for entries in windows.values_mut() {
                entries.retain(|t| *t > cutoff);
            }
            windows.retain(|_, entries| !entries.is_empty());
        }

        let entries = windows.entry(key.to_string()).or_default();
        if entries.len() >= self.limit {
            debug!("quota exhausted for key ({} in window)", entries.len());
            return false;
        }
        entries.push(now);
        true
    }

    /// Number of keys currently holding at least one in-window request
    pub async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }
}
