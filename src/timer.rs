//! Virtual timers driven by elapsed time supplied from the host loop.
//!
//! Each timer lives in a [`TimerSlot`]. Scheduling into an occupied slot cancels the
//! occupant first, so a slot can never hold two live timers and a reschedule never
//! double-fires.

use std::time::Duration;

/// Identifies one scheduled timer. A reschedule always yields a new id.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TimerId(u64);

/// Periodic source that becomes due once per `period`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Interval {
    period: Duration,
    since_last: Duration,
}

impl Interval {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Self {
            period,
            since_last: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next firing.
    #[must_use]
    pub fn until_due(&self) -> Duration {
        self.period.saturating_sub(self.since_last)
    }

    #[must_use]
    pub fn is_due(&self) -> bool {
        self.since_last >= self.period
    }

    pub fn elapse(&mut self, elapsed: Duration) {
        self.since_last = self.since_last.saturating_add(elapsed);
    }

    /// Starts the next period after a firing.
    pub fn rearm(&mut self) {
        self.since_last = self.since_last.saturating_sub(self.period);
    }
}

/// One-shot timer counting down from a fixed total.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
}

impl Countdown {
    #[must_use]
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn elapse(&mut self, elapsed: Duration) {
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    /// Remaining share of the total in `0.0..=1.0`.
    #[must_use]
    pub fn fraction_remaining(&self) -> f32 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f32() / self.total.as_secs_f32()
    }
}

/// Holder for at most one live timer of type `T`.
#[derive(Debug, Clone)]
pub struct TimerSlot<T> {
    issued: u64,
    active: Option<(TimerId, T)>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self {
            issued: 0,
            active: None,
        }
    }
}

impl<T> TimerSlot<T> {
    /// Cancels the current timer (if any), then installs `timer`.
    pub fn schedule(&mut self, timer: T) -> TimerId {
        self.cancel();
        self.issued += 1;
        let id = TimerId(self.issued);
        self.active = Some((id, timer));
        id
    }

    /// Cancels the live timer. Returns its id when one was active.
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.active.take().map(|(id, _)| id)
    }

    #[must_use]
    pub fn id(&self) -> Option<TimerId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.active.as_ref().map(|(_, timer)| timer)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.active.as_mut().map(|(_, timer)| timer)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
