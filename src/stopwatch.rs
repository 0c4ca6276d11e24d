//! Restartable wall-clock stopwatch for the timing loops.

use std::time::{Duration, Instant};

/// Monotonic stopwatch with start/stop/restart semantics.
///
/// `time()` reads elapsed seconds whether or not the watch is running, so
/// the driver can poll it inside a timing loop and read the final figure
/// after `stop()`. Backed by [`Instant`], so wall-clock adjustments never
/// affect it.
#[derive(Debug, Default)]
pub struct Stopwatch {
    accumulated: Duration,
    started: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring. Does nothing if already running.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stop measuring, folding the running interval into the total.
    pub fn stop(&mut self) {
        if let Some(since) = self.started.take() {
            self.accumulated += since.elapsed();
        }
    }

    /// Clear the accumulated time without starting.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started = None;
    }

    /// Clear and immediately start again.
    pub fn restart(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started = Some(Instant::now());
    }

    /// Elapsed seconds, including the currently running interval.
    pub fn time(&self) -> f64 {
        let running = self.started.map_or(Duration::ZERO, |since| since.elapsed());
        (self.accumulated + running).as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn advances_while_running() {
        let mut sw = Stopwatch::new();
        sw.start();
        thread::sleep(Duration::from_millis(10));
        assert!(sw.time() > 0.0);
    }

    #[test]
    fn freezes_when_stopped() {
        let mut sw = Stopwatch::new();
        sw.restart();
        thread::sleep(Duration::from_millis(5));
        sw.stop();
        let frozen = sw.time();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(sw.time(), frozen);
    }

    #[test]
    fn restart_discards_previous_total() {
        let mut sw = Stopwatch::new();
        sw.start();
        thread::sleep(Duration::from_millis(20));
        sw.stop();
        let first = sw.time();
        sw.restart();
        sw.stop();
        assert!(sw.time() < first);
    }

    #[test]
    fn reset_clears_to_zero() {
        let mut sw = Stopwatch::new();
        sw.start();
        thread::sleep(Duration::from_millis(5));
        sw.reset();
        assert_eq!(sw.time(), 0.0);
    }
}
