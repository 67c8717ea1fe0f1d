use std::time::{Duration, Instant};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Repeating display tick. Each due tick re-arms itself only while the timer is still running.
#[derive(Debug)]
pub struct RefreshTicker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RefreshTicker {
    pub fn new(interval: Duration) -> RefreshTicker {
        RefreshTicker {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Returns true if a tick fired
    pub fn poll(&mut self, now: Instant, running: bool) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                if running {
                    self.arm(now);
                    true
                } else {
                    self.cancel();
                    false
                }
            }
            _ => false,
        }
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}

impl Default for RefreshTicker {
    fn default() -> Self {
        RefreshTicker::new(DEFAULT_REFRESH_INTERVAL)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unarmed_never_fires() {
        let mut ticker = RefreshTicker::default();
        let now = Instant::now();
        assert!(!ticker.poll(now + Duration::from_secs(10), true));
        assert_eq!(ticker.time_until_next(now), None);
    }

    #[test]
    fn test_fires_when_due_and_rearms() {
        let mut ticker = RefreshTicker::new(Duration::from_millis(100));
        let start = Instant::now();
        ticker.arm(start);
        assert_eq!(
            ticker.time_until_next(start),
            Some(Duration::from_millis(100))
        );

        assert!(!ticker.poll(start + Duration::from_millis(50), true));
        assert!(ticker.poll(start + Duration::from_millis(100), true));
        assert!(ticker.is_armed());

        // Re-armed relative to the tick that fired
        let next = start + Duration::from_millis(100);
        assert_eq!(
            ticker.time_until_next(next),
            Some(Duration::from_millis(100))
        );
        assert!(!ticker.poll(next + Duration::from_millis(99), true));
        assert!(ticker.poll(next + Duration::from_millis(150), true));
    }

    #[test]
    fn test_stops_when_not_running() {
        let mut ticker = RefreshTicker::default();
        let start = Instant::now();
        ticker.arm(start);

        assert!(!ticker.poll(start + Duration::from_secs(1), false));
        assert!(!ticker.is_armed());
        assert!(!ticker.poll(start + Duration::from_secs(2), true));
    }

    #[test]
    fn test_cancel() {
        let mut ticker = RefreshTicker::default();
        let start = Instant::now();
        ticker.arm(start);
        ticker.cancel();
        assert!(!ticker.poll(start + Duration::from_secs(1), true));
        assert_eq!(ticker.time_until_next(start), None);
    }
}
