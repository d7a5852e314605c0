//! Fire-once timers.
//!
//! Timers cannot be cancelled; each one schedules a single follow-up
//! mutation that the controller applies when it comes due.

use std::time::{Duration, Instant};

/// Deferred mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Detach the loading indicator.
    RemoveLoader,
    /// Hide the swipe hint.
    HideSwipeHint,
}

/// Pending timers, ordered by insertion.
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<(Instant, TimerAction)>,
}

impl Timers {
    /// No timers pending.
    pub const fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Schedule `action` to fire `after` the given instant.
    pub fn schedule(&mut self, now: Instant, after: Duration, action: TimerAction) {
        self.pending.push((now + after, action));
    }

    /// Remove and return every action due at `now`, earliest first.
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerAction> {
        let mut due: Vec<(Instant, TimerAction)> = Vec::new();
        self.pending.retain(|&(at, action)| {
            if at <= now {
                due.push((at, action));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, action)| action).collect()
    }
}
