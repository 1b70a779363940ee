//! Time sources for event timestamps.

use chrono::Utc;

/// Source of the current time as fractional unix epoch seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> f64;
}

/// Reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        let now = Utc::now();
        now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
    }
}

/// Always returns the same instant. Used to make generation reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        let now = SystemClock.now();
        // 2020-01-01T00:00:00Z
        assert!(now > 1_577_836_800.0);
        assert!(now.fract() >= 0.0);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(1234.5);
        assert_eq!(clock.now(), 1234.5);
        assert_eq!(clock.now(), 1234.5);
    }
}
