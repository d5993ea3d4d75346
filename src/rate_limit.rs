use governor::clock::{Clock, DefaultClock};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

/// Riot's development keys allow 20 req/s; 100ms spacing stays well under that.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Blocks the caller until the next outbound request may be sent.
pub trait RequestGate {
    fn wait(&self);
}

/// Never blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGate;

impl RequestGate for NoopGate {
    fn wait(&self) {}
}

/// Admits one request per `interval` (a token bucket with a burst of one).
pub struct IntervalGate {
    limiter: Option<DefaultDirectRateLimiter>,
    clock: DefaultClock,
    admitted: AtomicU64,
}

impl IntervalGate {
    /// A zero interval yields a gate that never blocks.
    pub fn new(interval: Duration) -> Self {
        IntervalGate {
            limiter: Quota::with_period(interval).map(RateLimiter::direct),
            clock: DefaultClock::default(),
            admitted: AtomicU64::new(0),
        }
    }

    /// Number of requests let through so far.
    pub fn admitted(&self) -> u64 {
        self.admitted.load(Ordering::Relaxed)
    }
}

impl Default for IntervalGate {
    fn default() -> Self {
        IntervalGate::new(DEFAULT_INTERVAL)
    }
}

impl RequestGate for IntervalGate {
    fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            while let Err(not_until) = limiter.check() {
                thread::sleep(not_until.wait_time_from(self.clock.now()));
            }
        }
        self.admitted.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn interval_gate_spaces_requests() {
        let gate = IntervalGate::new(Duration::from_millis(30));
        let start = Instant::now();
        gate.wait();
        gate.wait();
        gate.wait();
        // first call is free, the next two wait one interval each
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(gate.admitted(), 3);
    }

    #[test]
    fn zero_interval_never_blocks() {
        let gate = IntervalGate::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..100 {
            gate.wait();
        }
        assert!(start.elapsed() < Duration::from_millis(50));
        assert_eq!(gate.admitted(), 100);
    }
}
