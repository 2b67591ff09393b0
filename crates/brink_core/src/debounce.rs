//! Trailing-edge debouncing
//!
//! A [`Debouncer`] wraps an action and a wait duration. Every [`call`] cancels
//! the pending run (if any) and schedules a fresh one `wait` from now, so the
//! action only runs once calls have stopped arriving for a full window.
//!
//! There is no leading-edge run and no queue of pending calls: at most one
//! timer is armed at a time.
//!
//! [`call`]: Debouncer::call

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{trace, warn};

use crate::timer::{TimerHandle, TimerId};

struct DebounceState {
    action: Box<dyn Fn()>,
    pending: Cell<Option<TimerId>>,
}

/// Coalesces bursts of calls into a single delayed action
///
/// Dropping the debouncer cancels a pending run.
pub struct Debouncer {
    state: Rc<DebounceState>,
    timers: TimerHandle,
    wait: Duration,
}

impl Debouncer {
    pub fn new<F>(timers: TimerHandle, wait: Duration, action: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            state: Rc::new(DebounceState {
                action: Box::new(action),
                pending: Cell::new(None),
            }),
            timers,
            wait,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Request a run of the action, restarting the wait window
    ///
    /// If the event loop has shut down the call is dropped.
    pub fn call(&self) {
        self.cancel();

        let state = Rc::downgrade(&self.state);
        let scheduled = self.timers.schedule(self.wait, move || {
            if let Some(state) = state.upgrade() {
                state.pending.set(None);
                (state.action)();
            }
        });

        match scheduled {
            Ok(id) => {
                trace!(?id, wait = ?self.wait, "debounce armed");
                self.state.pending.set(Some(id));
            }
            Err(err) => warn!(%err, "debounced call dropped"),
        }
    }

    /// Cancel the pending run, if any
    ///
    /// Returns `true` if a run was pending.
    pub fn cancel(&self) -> bool {
        match self.state.pending.take() {
            Some(id) => self.timers.cancel(id),
            None => false,
        }
    }

    /// Run a pending action immediately instead of waiting
    ///
    /// Returns `false` without running anything if nothing was pending.
    pub fn flush(&self) -> bool {
        if self.cancel() {
            (self.state.action)();
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.pending.get().is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.wait)
            .field("pending", &self.is_pending())
            .finish()
    }
}
