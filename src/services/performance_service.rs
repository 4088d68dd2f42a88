//! Startup timing.

use log::info;
use std::time::{Duration, Instant};

/// Measures the time from process start until the page is first shown.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceTracker {
    started: Instant,
}

impl PerformanceTracker {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Logs the page load time. Returns the logged value in milliseconds.
    pub fn log_page_load(&self) -> u128 {
        let load_time = self.elapsed().as_millis();
        info!("Page load time: {}ms", load_time);
        load_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let tracker = PerformanceTracker::start();
        let first = tracker.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert!(tracker.elapsed() > first);
        assert!(tracker.log_page_load() >= 2);
    }
}
