//! Tests for the sliding-window quota tracker
//!
//! Window-expiry tests use shortened windows so they run in milliseconds
//! instead of waiting out the production one-hour window.

use std::sync::Arc;
use std::time::Duration;

use jobscout::QuotaTracker;

#[tokio::test]
async fn admits_up_to_ceiling_then_rejects() {
    let tracker = QuotaTracker::new(10);

    for _ in 0..10 {
        assert!(tracker.admit("key-a").await);
    }
    assert!(!tracker.admit("key-a").await);
    assert!(!tracker.admit("key-a").await);
}

#[tokio::test]
async fn unknown_key_starts_with_zero_prior_requests() {
    let tracker = QuotaTracker::new(1);

    assert!(tracker.admit("never-seen").await);
    assert!(tracker.admit("also-never-seen").await);
}

#[tokio::test]
async fn keys_are_counted_independently() {
    let tracker = QuotaTracker::new(2);

    assert!(tracker.admit("a").await);
    assert!(tracker.admit("a").await);
    assert!(!tracker.admit("a").await);

    // A different key still has its full allowance
    assert!(tracker.admit("b").await);
}

#[tokio::test]
async fn oldest_entry_aging_out_frees_exactly_one_slot() {
    let tracker = QuotaTracker::with_window(2, Duration::from_millis(100));

    assert!(tracker.admit("key").await);
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(tracker.admit("key").await);
    assert!(!tracker.admit("key").await);

    // First admission ages out, second is still inside the window
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(tracker.admit("key").await);
    assert!(!tracker.admit("key").await);
}

#[tokio::test]
async fn rejected_attempts_are_not_recorded() {
    let tracker = QuotaTracker::with_window(1, Duration::from_millis(80));

    assert!(tracker.admit("key").await);
    assert!(!tracker.admit("key").await);
    assert!(!tracker.admit("key").await);

    // Only the single admitted request occupies the window; once it ages
    // out the key is clear again despite the rejected probes.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(tracker.admit("key").await);
}

#[tokio::test]
async fn sweep_prunes_stale_keys_from_the_map() {
    let tracker = QuotaTracker::with_window(5, Duration::from_millis(50));

    assert!(tracker.admit("old").await);
    assert_eq!(tracker.tracked_keys().await, 1);

    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(tracker.admit("fresh").await);
    assert_eq!(tracker.tracked_keys().await, 1);
}

#[tokio::test]
async fn concurrent_admissions_never_exceed_the_ceiling() {
    let tracker = Arc::new(QuotaTracker::new(10));

    let mut handles = Vec::new();
    for _ in 0..100 {
        let tracker = tracker.clone();
        handles.push(tokio::spawn(async move { tracker.admit("shared").await }));
    }

    let mut admitted = 0;
    for handle in handles {
        if handle.await.unwrap() {
            admitted += 1;
        }
    }
    assert_eq!(admitted, 10);
}
