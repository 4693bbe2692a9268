//! Elapsed-time logging for backend calls.

use std::time::{Duration, Instant};

use tracing::debug;

/// Measures one backend call and logs its duration when finished.
#[derive(Debug)]
pub struct FetchTimer {
    label: &'static str,
    start: Instant,
}

impl FetchTimer {
    /// Start timing `label` (e.g. `"GET /products"`).
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Elapsed time so far.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log the outcome and return the elapsed time.
    pub fn finish(self, ok: bool) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            fetch = self.label,
            ok,
            elapsed_us = elapsed.as_micros() as u64,
            "fetch finished"
        );
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_measures_elapsed() {
        let timer = FetchTimer::start("GET /products");
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.finish(true) >= Duration::from_millis(2));
    }
}
