//! Brink event loop
//!
//! The loop owns a clock and the timer queue. A host calls [`EventLoop::turn`]
//! whenever it wakes (after dispatching input, or once
//! [`EventLoop::time_until_next`] has elapsed). Headless hosts and tests use a
//! [`ManualClock`] and drive time with [`EventLoop::advance`].

use std::rc::Rc;
use std::time::Duration;

use tracing::trace;

use crate::clock::{Clock, ManualClock, SystemClock};
use crate::timer::{TimerHandle, TimerQueue};

/// Single-threaded event loop
pub struct EventLoop<C: Clock + Clone + 'static = SystemClock> {
    clock: C,
    timers: TimerQueue,
    turns: u64,
}

impl EventLoop<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for EventLoop<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop<ManualClock> {
    /// Create a loop driven by virtual time starting at zero
    pub fn manual() -> Self {
        Self::with_clock(ManualClock::new())
    }

    /// Move virtual time forward by `delta`
    ///
    /// Time stops at every timer deadline inside the window so each timer
    /// observes its own deadline as "now", including timers scheduled by
    /// callbacks during the advance. Returns the number of timers fired.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let target = self.clock.now() + delta;
        let mut fired = 0;

        while let Some(deadline) = self.timers.next_deadline() {
            if deadline > target {
                break;
            }
            self.clock.set(deadline);
            fired += self.turn();
        }

        self.clock.set(target);
        fired + self.turn()
    }
}

impl<C: Clock + Clone + 'static> EventLoop<C> {
    pub fn with_clock(clock: C) -> Self {
        let timers = TimerQueue::new(Rc::new(clock.clone()));
        Self {
            clock,
            timers,
            turns: 0,
        }
    }

    /// Get a handle for scheduling timers on this loop
    pub fn timers(&self) -> TimerHandle {
        self.timers.handle()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Run one turn: fire every timer that is due
    pub fn turn(&mut self) -> usize {
        self.turns += 1;
        let fired = self.timers.fire_due();
        trace!(turn = self.turns, fired, "loop turn");
        fired
    }

    /// Deadline of the next pending timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// How long the host may wait before the next turn is needed
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    /// Whether no timers are pending
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Get statistics about the loop
    pub fn stats(&self) -> LoopStats {
        LoopStats {
            turns: self.turns,
            pending_timers: self.timers.len(),
            timers_fired: self.timers.fired_count(),
        }
    }
}

/// Statistics about the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    pub turns: u64,
    pub pending_timers: usize,
    pub timers_fired: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_advance_stops_at_each_deadline() {
        let mut event_loop = EventLoop::manual();
        let timers = event_loop.timers();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for ms in [30u64, 10, 20] {
            let seen = seen.clone();
            let handle = timers.clone();
            timers
                .schedule(Duration::from_millis(ms), move || {
                    seen.borrow_mut().push(handle.now().unwrap())
                })
                .unwrap();
        }

        assert_eq!(event_loop.advance(Duration::from_millis(100)), 3);
        assert_eq!(
            *seen.borrow(),
            vec![
                Duration::from_millis(10),
                Duration::from_millis(20),
                Duration::from_millis(30)
            ]
        );
        assert_eq!(event_loop.now(), Duration::from_millis(100));
    }

    #[test]
    fn test_advance_fires_timers_scheduled_during_advance() {
        let mut event_loop = EventLoop::manual();
        let timers = event_loop.timers();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let chain = timers.clone();
        let log = seen.clone();
        timers
            .schedule(Duration::from_millis(40), move || {
                log.borrow_mut().push(chain.now().unwrap());
                let log = log.clone();
                let inner = chain.clone();
                chain
                    .schedule(Duration::from_millis(40), move || {
                        log.borrow_mut().push(inner.now().unwrap())
                    })
                    .unwrap();
            })
            .unwrap();

        event_loop.advance(Duration::from_millis(100));
        assert_eq!(
            *seen.borrow(),
            vec![Duration::from_millis(40), Duration::from_millis(80)]
        );
        assert!(event_loop.is_idle());
    }

    #[test]
    fn test_time_until_next_and_stats() {
        let mut event_loop = EventLoop::manual();
        assert_eq!(event_loop.time_until_next(), None);

        event_loop
            .timers()
            .schedule(Duration::from_millis(100), || {})
            .unwrap();
        event_loop.advance(Duration::from_millis(25));
        assert_eq!(
            event_loop.time_until_next(),
            Some(Duration::from_millis(75))
        );

        let stats = event_loop.stats();
        assert_eq!(stats.pending_timers, 1);
        assert_eq!(stats.timers_fired, 0);

        event_loop.advance(Duration::from_millis(75));
        let stats = event_loop.stats();
        assert_eq!(stats.pending_timers, 0);
        assert_eq!(stats.timers_fired, 1);
    }

    #[test]
    fn test_system_loop_turn_without_timers() {
        let mut event_loop = EventLoop::new();
        assert!(event_loop.is_idle());
        assert_eq!(event_loop.turn(), 0);
        assert_eq!(event_loop.stats().turns, 1);
    }
}
