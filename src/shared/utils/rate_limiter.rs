use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const WINDOW: Duration = Duration::from_secs(1);

/// Sliding-window rate limiter: keeps the timestamps of the most recent
/// calls and delays the caller once the one-second window is full. Bursts of
/// up to `calls_per_second` back-to-back calls go through undelayed.
pub struct RateLimiter {
    calls_per_second: usize,
    window: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(calls_per_second: usize) -> Self {
        let calls_per_second = calls_per_second.max(1);
        Self {
            calls_per_second,
            window: Mutex::new(VecDeque::with_capacity(calls_per_second)),
        }
    }

    /// Blocks until issuing another call would not exceed the window.
    /// Never fails, only delays. There is exactly one cycle in flight, so
    /// holding the lock across the sleep stalls the whole cycle.
    pub async fn wait_for_slot(&self) {
        let mut window = self.window.lock().await;
        let now = Instant::now();

        while window
            .front()
            .is_some_and(|first| now.duration_since(*first) > WINDOW)
        {
            window.pop_front();
        }

        if window.len() >= self.calls_per_second {
            if let Some(oldest) = window.front().copied() {
                let elapsed = now.duration_since(oldest);
                if elapsed < WINDOW {
                    sleep(WINDOW - elapsed).await;
                }
            }
        }
    }

    /// Registers a completed call. The window stays bounded to
    /// `calls_per_second` entries.
    pub async fn record_call(&self) {
        let mut window = self.window.lock().await;
        window.push_back(Instant::now());
        while window.len() > self.calls_per_second {
            window.pop_front();
        }
    }
}
