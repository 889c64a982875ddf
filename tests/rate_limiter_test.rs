//! Rate limiter tests
//!
//! Exercises the sliding-window limiter's burst and throttle behavior
//! against real time.

use latest_ratings::shared::utils::RateLimiter;
use std::time::{Duration, Instant};

#[tokio::test]
async fn burst_up_to_capacity_is_not_delayed() {
    let limiter = RateLimiter::new(2);

    let start = Instant::now();
    for _ in 0..2 {
        limiter.wait_for_slot().await;
        limiter.record_call().await;
    }

    assert!(
        start.elapsed() < Duration::from_millis(200),
        "burst within capacity was delayed: {:?}",
        start.elapsed()
    );
}

#[tokio::test]
async fn third_call_in_a_two_per_second_window_is_throttled() {
    let limiter = RateLimiter::new(2);

    let start = Instant::now();
    for _ in 0..3 {
        limiter.wait_for_slot().await;
        limiter.record_call().await;
    }
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(500),
        "third call proceeded after only {:?}",
        elapsed
    );
    // Bounded wait, not an unbounded stall.
    assert!(
        elapsed < Duration::from_secs(3),
        "throttle wait ran long: {:?}",
        elapsed
    );
}

#[tokio::test]
async fn window_drains_after_a_second() {
    let limiter = RateLimiter::new(2);

    for _ in 0..2 {
        limiter.wait_for_slot().await;
        limiter.record_call().await;
    }
    tokio::time::sleep(Duration::from_millis(1100)).await;

    let start = Instant::now();
    limiter.wait_for_slot().await;
    assert!(
        start.elapsed() < Duration::from_millis(100),
        "drained window still delayed: {:?}",
        start.elapsed()
    );
}
