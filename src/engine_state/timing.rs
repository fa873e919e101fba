//! Fixed-period gravity timer.
//!
//! The timer is driven by whatever clock the caller passes in, so the event
//! loop and tests share the same code path.

use web_time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct TickTimer {
    period: Duration,
    next: Instant,
}

impl TickTimer {
    /// Starts a timer whose first tick is due one period after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Instant at which the next tick is due.
    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Number of ticks that elapsed up to `now`, advancing the deadline past them.
    ///
    /// A zero period yields at most one tick per poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next {
            due += 1;
            if self.period.is_zero() {
                self.next = now + Duration::from_millis(1);
                break;
            }
            self.next += self.period;
        }
        due
    }

    /// Pushes the next deadline a full period past `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_before_first_period() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100), start);
        assert_eq!(timer.poll(start + Duration::from_millis(99)), 0);
        assert_eq!(timer.poll(start + Duration::from_millis(100)), 1);
        assert_eq!(timer.next_deadline(), start + Duration::from_millis(200));
    }

    #[test]
    fn catches_up_after_a_stall() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100), start);
        assert_eq!(timer.poll(start + Duration::from_millis(350)), 3);
        assert_eq!(timer.poll(start + Duration::from_millis(350)), 0);
    }

    #[test]
    fn reset_restarts_the_period() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100), start);
        timer.reset(start + Duration::from_millis(90));
        assert_eq!(timer.poll(start + Duration::from_millis(150)), 0);
        assert_eq!(timer.poll(start + Duration::from_millis(190)), 1);
    }
}
