//! Cancellable timer queue
//!
//! Timers are one-shot callbacks keyed by a [`TimerId`]. The queue never
//! sleeps: the owning [`EventLoop`](crate::EventLoop) asks it to fire whatever
//! is due at the start of each turn.
//!
//! Callbacks run with no borrow held on the queue, so a firing timer may
//! schedule or cancel other timers. Timers scheduled while a turn is in
//! progress are never fired in that same turn, even with a zero delay.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::trace;

use crate::clock::Clock;
use crate::error::{CoreError, Result};

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

type TimerCallback = Box<dyn FnOnce()>;

struct TimerEntry {
    deadline: Duration,
    /// Insertion order, breaks ties between equal deadlines
    seq: u64,
    callback: TimerCallback,
}

struct TimerQueueInner {
    clock: Rc<dyn Clock>,
    timers: SlotMap<TimerId, TimerEntry>,
    next_seq: u64,
    fired: u64,
}

/// Owner of all pending timers for one event loop
///
/// Dropping the queue drops every pending callback; outstanding
/// [`TimerHandle`]s then report [`CoreError::LoopClosed`].
pub struct TimerQueue {
    inner: Rc<RefCell<TimerQueueInner>>,
}

impl TimerQueue {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TimerQueueInner {
                clock,
                timers: SlotMap::with_key(),
                next_seq: 0,
                fired: 0,
            })),
        }
    }

    /// Get a weak handle for scheduling timers on this queue
    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Current time according to the queue's clock
    pub fn now(&self) -> Duration {
        self.inner.borrow().clock.now()
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().timers.is_empty()
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Duration> {
        self.inner
            .borrow()
            .timers
            .values()
            .map(|entry| entry.deadline)
            .min()
    }

    /// Total number of timers fired over the queue's lifetime
    pub fn fired_count(&self) -> u64 {
        self.inner.borrow().fired
    }

    /// Fire every timer whose deadline has passed
    ///
    /// Timers fire in deadline order, ties broken by scheduling order.
    /// Returns the number of callbacks run.
    pub fn fire_due(&self) -> usize {
        let due: SmallVec<[TimerId; 8]> = {
            let inner = self.inner.borrow();
            let now = inner.clock.now();
            let mut due: SmallVec<[(Duration, u64, TimerId); 8]> = inner
                .timers
                .iter()
                .filter(|(_, entry)| entry.deadline <= now)
                .map(|(id, entry)| (entry.deadline, entry.seq, id))
                .collect();
            due.sort_unstable_by_key(|&(deadline, seq, _)| (deadline, seq));
            due.into_iter().map(|(_, _, id)| id).collect()
        };

        let mut fired = 0;
        for id in due {
            // An earlier callback in this turn may have cancelled it
            let entry = self.inner.borrow_mut().timers.remove(id);
            if let Some(entry) = entry {
                trace!(?id, deadline = ?entry.deadline, "timer fired");
                (entry.callback)();
                fired += 1;
            }
        }

        self.inner.borrow_mut().fired += fired as u64;
        fired
    }
}

/// A weak handle to a [`TimerQueue`]
///
/// Handed to components that need to schedule work. It won't keep the
/// queue alive.
#[derive(Clone)]
pub struct TimerHandle {
    inner: Weak<RefCell<TimerQueueInner>>,
}

impl TimerHandle {
    /// Schedule `callback` to run once `delay` has elapsed
    pub fn schedule<F>(&self, delay: Duration, callback: F) -> Result<TimerId>
    where
        F: FnOnce() + 'static,
    {
        let queue = self.inner.upgrade().ok_or(CoreError::LoopClosed)?;
        let mut inner = queue.borrow_mut();

        let now = inner.clock.now();
        let deadline = now
            .checked_add(delay)
            .ok_or(CoreError::DeadlineOverflow { now, delay })?;
        let seq = inner.next_seq;
        inner.next_seq += 1;

        let id = inner.timers.insert(TimerEntry {
            deadline,
            seq,
            callback: Box::new(callback),
        });
        trace!(?id, ?deadline, "timer scheduled");
        Ok(id)
    }

    /// Cancel a pending timer
    ///
    /// Returns `true` if the timer was still pending.
    pub fn cancel(&self, id: TimerId) -> bool {
        let Some(queue) = self.inner.upgrade() else {
            return false;
        };
        let removed = queue.borrow_mut().timers.remove(id);
        if removed.is_some() {
            trace!(?id, "timer cancelled");
        }
        removed.is_some()
    }

    /// Check whether a timer is still waiting to fire
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|queue| queue.borrow().timers.contains_key(id))
            .unwrap_or(false)
    }

    /// Current time on the queue's clock
    pub fn now(&self) -> Result<Duration> {
        self.inner
            .upgrade()
            .map(|queue| queue.borrow().clock.now())
            .ok_or(CoreError::LoopClosed)
    }

    /// Whether the backing queue still exists
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}
