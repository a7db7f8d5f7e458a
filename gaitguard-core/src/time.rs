//! Session time
//!
//! All timestamps are monotonic seconds supplied by the capture source. The
//! engine never reads a clock itself; it only compares the timestamps it is
//! handed, so replayed and live sessions behave the same.

/// Monotonic timestamp in seconds since an arbitrary session-local origin
pub type Timestamp = f64;

/// Age of `then` as seen from `now`, `None` if either value is not finite
pub fn age(then: Timestamp, now: Timestamp) -> Option<f64> {
    if then.is_finite() && now.is_finite() {
        Some(now - then)
    } else {
        None
    }
}

/// Tracks the first and latest timestamps of a session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionClock {
    started: Option<Timestamp>,
    latest: Option<Timestamp>,
}

impl SessionClock {
    /// Clock with no observations
    pub const fn new() -> Self {
        Self {
            started: None,
            latest: None,
        }
    }

    /// Record an observed timestamp; non-finite and backwards values are ignored
    pub fn observe(&mut self, timestamp: Timestamp) {
        if !timestamp.is_finite() {
            return;
        }
        if self.started.is_none() {
            self.started = Some(timestamp);
        }
        match self.latest {
            Some(latest) if timestamp < latest => {}
            _ => self.latest = Some(timestamp),
        }
    }

    /// First observed timestamp
    pub fn started(&self) -> Option<Timestamp> {
        self.started
    }

    /// Latest observed timestamp
    pub fn latest(&self) -> Option<Timestamp> {
        self.latest
    }

    /// Seconds between first and latest observation (0 for a single observation)
    pub fn duration(&self) -> f64 {
        match (self.started, self.latest) {
            (Some(start), Some(end)) => (end - start).max(0.0),
            _ => 0.0,
        }
    }

    /// Forget all observations
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_rejects_non_finite() {
        assert_eq!(age(1.0, 3.5), Some(2.5));
        assert_eq!(age(f64::NAN, 3.5), None);
    }

    #[test]
    fn clock_tracks_span() {
        let mut clock = SessionClock::new();
        assert_eq!(clock.duration(), 0.0);
        clock.observe(10.0);
        clock.observe(12.5);
        clock.observe(11.0); // late sample does not move latest back
        clock.observe(f64::NAN);
        assert_eq!(clock.started(), Some(10.0));
        assert_eq!(clock.latest(), Some(12.5));
        assert!((clock.duration() - 2.5).abs() < 1e-12);
        clock.reset();
        assert_eq!(clock.started(), None);
    }
}
