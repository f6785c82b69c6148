//! One-shot timer abstraction used for auto-advance.
//!
//! The session only ever schedules and cancels; whoever owns the event loop calls
//! [`crate::RosarySession::fire_timer`] when a timer elapses.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

pub trait Scheduler {
    /// Arrange for `id` to be delivered back after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerId;
    /// Drop a timer that has not fired yet. Unknown ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Deterministic virtual-time scheduler.
///
/// Time only moves when the owner calls [`TimerQueue::advance_by`] or
/// [`TimerQueue::advance_to`]; due timers are returned in deadline order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<(TimerId, Duration)>,
    scheduled: usize,
    cancelled: usize,
    fired: usize,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|&(_, at)| at).min()
    }

    pub fn advance_by(&mut self, dt: Duration) -> Vec<TimerId> {
        let target = self.now.saturating_add(dt);
        self.advance_to(target)
    }

    /// Moves the clock forward (never backwards) and returns every timer now due.
    pub fn advance_to(&mut self, at: Duration) -> Vec<TimerId> {
        self.now = self.now.max(at);
        let now = self.now;
        let mut due: Vec<(TimerId, Duration)> = Vec::new();
        self.pending.retain(|&(id, deadline)| {
            if deadline <= now {
                due.push((id, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(id, deadline)| (deadline, id));
        self.fired += due.len();
        due.into_iter().map(|(id, _)| id).collect()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|&(p, _)| p == id)
    }

    /// Timers scheduled but neither cancelled nor fired.
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }

    pub fn fired_count(&self) -> usize {
        self.fired
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, self.now.saturating_add(delay)));
        self.scheduled += 1;
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let before = self.pending.len();
        self.pending.retain(|&(p, _)| p != id);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}
