//! Virtual-clock scheduler
//!
//! All deferred work in the simulation (lasso disarm, escape timers, the
//! wander interval) is a tick-counted entry here, advanced explicitly once
//! per frame. Cancelling a timer removes its entry, so a replaced escape
//! timer can never fire late.

use serde::{Deserialize, Serialize};

/// Opaque, cancellable reference to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(u64);

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// End of the lasso's armed window
    LassoDisarm,
    /// Periodic re-roll of free-roaming unit headings
    WanderStep,
    /// A held unit breaks loose
    Escape { unit: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    handle: TimerHandle,
    /// Ticks until the next fire
    remaining: u32,
    /// `Some` for repeating timers
    interval: Option<u32>,
    kind: TimerKind,
}

/// Deterministic one-shot / repeating timer queue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_handle: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot timer that fires after `delay_ticks` advances
    pub fn once(&mut self, delay_ticks: u32, kind: TimerKind) -> TimerHandle {
        self.push(delay_ticks, None, kind)
    }

    /// Schedule a repeating timer that fires every `interval_ticks` advances
    pub fn every(&mut self, interval_ticks: u32, kind: TimerKind) -> TimerHandle {
        self.push(interval_ticks, Some(interval_ticks), kind)
    }

    fn push(&mut self, delay_ticks: u32, interval: Option<u32>, kind: TimerKind) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            remaining: delay_ticks.max(1),
            interval,
            kind,
        });
        handle
    }

    /// Remove a pending timer; returns false if it already fired or was
    /// cancelled before
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() < before
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Advance the virtual clock by one tick, returning the timers that
    /// fired in registration order
    pub fn advance(&mut self) -> Vec<TimerKind> {
        let mut fired = Vec::new();
        self.entries.retain_mut(|e| {
            e.remaining -= 1;
            if e.remaining > 0 {
                return true;
            }
            fired.push(e.kind);
            match e.interval {
                Some(interval) => {
                    e.remaining = interval.max(1);
                    true
                }
                None => false,
            }
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut sched = Scheduler::new();
        let handle = sched.once(3, TimerKind::LassoDisarm);
        assert!(sched.advance().is_empty());
        assert!(sched.advance().is_empty());
        assert_eq!(sched.advance(), vec![TimerKind::LassoDisarm]);
        assert!(!sched.is_scheduled(handle));
        assert!(sched.advance().is_empty());
    }

    #[test]
    fn test_repeating_fires_every_interval() {
        let mut sched = Scheduler::new();
        let _ = sched.every(2, TimerKind::WanderStep);
        let mut fire_ticks = Vec::new();
        for tick in 1..=6 {
            if !sched.advance().is_empty() {
                fire_ticks.push(tick);
            }
        }
        assert_eq!(fire_ticks, vec![2, 4, 6]);
    }

    #[test]
    fn test_cancel_prevents_fire() {
        let mut sched = Scheduler::new();
        let handle = sched.once(2, TimerKind::Escape { unit: 0 });
        assert!(sched.cancel(handle));
        assert!(!sched.cancel(handle));
        for _ in 0..10 {
            assert!(sched.advance().is_empty());
        }
    }

    #[test]
    fn test_fires_in_registration_order() {
        let mut sched = Scheduler::new();
        let _ = sched.once(1, TimerKind::Escape { unit: 0 });
        let _ = sched.once(1, TimerKind::Escape { unit: 1 });
        assert_eq!(
            sched.advance(),
            vec![TimerKind::Escape { unit: 0 }, TimerKind::Escape { unit: 1 }]
        );
    }
}
